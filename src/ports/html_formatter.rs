//! HTML Callstack Formatter
//!
//! Renders callstacks as an HTML fragment for crash report pages.

use crate::domain::callstack::CallstackContainer;
use crate::ports::{CallstackFormatter, CallstackReport};

const NAME_COLOR: &str = "#151B8D";

pub struct HtmlFormatter;

impl CallstackFormatter for HtmlFormatter {
    fn format(&self, callstack: &CallstackContainer) -> String {
        let options = callstack.options;
        let mut html = String::from("<br>");

        for frame in callstack.frames() {
            if options.raw {
                html.push_str(&Self::escape(&frame.raw_line));
                html.push_str("<br>");
                continue;
            }
            if options.module_names {
                html.push_str(&Self::highlight(&format!("{}!", frame.module_name())));
            }
            if options.function_names {
                html.push_str(&Self::highlight(frame.function_name()));
            }
            if let Some(location) = options.location(frame) {
                html.push_str(&format!(" --- <b>{}</b>", Self::escape(&location)));
            }
            html.push_str("<br>");
        }

        html
    }

    fn header(&self, report: &CallstackReport) -> String {
        format!(
            "<h3>Crash {} ({})</h3>\n",
            report.crash_id,
            Self::escape(report.callstack.module_name())
        )
    }
}

impl HtmlFormatter {
    fn highlight(text: &str) -> String {
        format!(
            "<b><font color=\"{}\">{}</font></b>",
            NAME_COLOR,
            Self::escape(text)
        )
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
    }
}
