use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

pub(crate) fn render_miette(diagnostic: &dyn Diagnostic) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(80)
        .render_report(&mut out, diagnostic)
        .unwrap();
    out
}
