use super::theme::OneDark;
use chrono::NaiveDate;
use recur_core::{
    RecurIssue, RunReport,
    rem::{Modifiers, PatternKind},
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: match config {
                Some(config) => config,
                None => RenderOptions {
                    date_format: "%a, %d %b %Y".to_string(),
                    use_color: true,
                },
            },
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            println!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {message} |\n|-|\n");
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.opts.use_color {
            text.to_string().with(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn print_report(&self, date: NaiveDate, report: &RunReport, dry_run: bool) {
        let date = date.format(&self.opts.date_format).to_string();
        let verb = if dry_run { "Would add" } else { "Added" };

        if report.added.is_empty() && report.existing.is_empty() {
            self.print_info(&format!("No recurring tasks for {date}."));
        } else {
            self.print_info(&format!(
                "{verb} {} task(s) for {date}, {} already listed.",
                report.added.len(),
                report.existing.len()
            ));
        }

        for task in &report.added {
            println!("{} {}", self.paint("+", OneDark::GREEN), self.paint(task, OneDark::YELLOW));
        }
        for task in &report.existing {
            println!("{} {}", self.paint("=", OneDark::COMMENT), self.paint(task, OneDark::COMMENT));
        }

        if !report.issues.is_empty() {
            self.print_issues(&report.issues);
        }
    }

    pub fn print_issues(&self, issues: &[RecurIssue]) {
        self.print_md("\n# Problems in the recurrence file:");
        for issue in issues {
            self.print_md(&format!("* {issue}"));
        }
    }

    pub fn print_check(
        &self,
        pattern: &str,
        date: NaiveDate,
        modifiers: Modifiers,
        found: Option<(PatternKind, bool)>,
    ) {
        let date = date.format(&self.opts.date_format).to_string();
        let kind = found
            .map(|(kind, _)| kind.as_ref().to_string())
            .unwrap_or_else(|| "-".to_string());
        let result = describe_result(found);
        let color = match found {
            Some((_, true)) => OneDark::GREEN,
            Some((_, false)) => OneDark::YELLOW,
            None => OneDark::RED,
        };

        println!("{{{pattern}}} on {date}");
        println!("  kind:      {kind}");
        println!("  modifiers: {}", describe_modifiers(modifiers));
        println!("  result:    {}", self.paint(result, color));
    }
}

fn describe_modifiers(modifiers: Modifiers) -> String {
    let mut parts = Vec::new();
    if let Some(days) = modifiers.warning {
        parts.push(format!("warning +{days}"));
    }
    if let Some(days) = modifiers.repeat {
        parts.push(format!("repeat *{days}"));
    }
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

fn describe_result(found: Option<(PatternKind, bool)>) -> &'static str {
    match found {
        Some((_, true)) => "matches",
        Some((_, false)) => "no match",
        None => "unparseable",
    }
}
