use std::{fmt::Write as _, path::PathBuf};

use admin_core::{AdminPanel, HttpMemberSource, PageNav};
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Print one page of the member list")]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    members_url: Option<String>,
    /// Case-insensitive match against name, email or role.
    #[arg(long, default_value = "")]
    search: String,
    /// 1-indexed page to print.
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings =
        admin_core::load_settings(args.config.as_deref()).context("failed to load settings")?;
    settings.apply_cli_overrides(args.members_url);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = HttpMemberSource::from_settings(&settings)?;
    let mut panel = AdminPanel::new();
    panel
        .load(&source)
        .await
        .with_context(|| format!("failed to load members from {}", source.url()))?;

    panel.set_search_term(args.search);
    panel.go_to_page(args.page);
    print!("{}", render_page(&panel));
    Ok(())
}

fn render_page(panel: &AdminPanel) -> String {
    let rows = panel.current_rows();
    let name_w = column_width("Name", rows.iter().map(|m| m.name.as_str()));
    let email_w = column_width("Email", rows.iter().map(|m| m.email.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "{:<name_w$}  {:<email_w$}  Role", "Name", "Email");
    for member in &rows {
        let _ = writeln!(
            out,
            "{:<name_w$}  {:<email_w$}  {}",
            member.name,
            member.email,
            member.display_role()
        );
    }
    if rows.is_empty() {
        let _ = writeln!(out, "(no members on this page)");
    }

    let controls = panel.page_controls();
    let mark = |nav: PageNav, label: &str| {
        if controls.is_enabled(nav) {
            label.to_string()
        } else {
            format!("({label})")
        }
    };
    let numbers: Vec<String> = controls
        .page_numbers()
        .map(|page| {
            if controls.is_current(page) {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    let _ = writeln!(
        out,
        "{} {} {} {} {}   page {} of {}, {} matching",
        mark(PageNav::First, "<<"),
        mark(PageNav::Previous, "<"),
        numbers.join(" "),
        mark(PageNav::Next, ">"),
        mark(PageNav::Last, ">>"),
        controls.current,
        controls.total,
        panel.filtered_len()
    );
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|value| value.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::Member;

    #[test]
    fn renders_rows_with_capitalized_roles_and_controls() {
        let mut panel = AdminPanel::with_members(vec![
            Member::new("1", "Ann", "a@x.com", "member"),
            Member::new("2", "Bo", "b@x.com", "admin"),
        ]);
        panel.set_search_term("admin");

        let text = render_page(&panel);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name  Email    Role");
        assert_eq!(lines[1], "Bo    b@x.com  Admin");
        assert_eq!(lines[2], "(<<) (<) [1] (>) (>>)   page 1 of 1, 1 matching");
    }

    #[test]
    fn reports_empty_page_past_the_end() {
        let mut panel = AdminPanel::with_members(vec![Member::new("1", "Ann", "a@x.com", "member")]);
        panel.go_to_page(4);

        let text = render_page(&panel);
        assert!(text.contains("(no members on this page)"));
        assert!(text.contains("<< < 1 (>) (>>)   page 4 of 1"));
    }
}
