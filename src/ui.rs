//! Plain-text rendering for the terminal: menus, question boxes and banners.

use itertools::Itertools;
use unicode_width::UnicodeWidthStr;

use crate::catalog::Catalog;
use crate::question::Question;
use crate::report::Report;

const MIN_BOX_WIDTH: usize = 40;
const BANNER_WIDTH: usize = 63;

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(fill))
}

/// Draws `rows` inside a bordered box; the first row becomes the header
pub fn boxed(rows: &[String]) -> String {
    let width = rows
        .iter()
        .map(|r| r.width())
        .max()
        .unwrap_or(0)
        .max(MIN_BOX_WIDTH);
    let rule = format!("+-{}-+", "-".repeat(width));

    let mut out = vec![rule.clone()];
    let mut rows = rows.iter();
    if let Some(header) = rows.next() {
        out.push(format!("| {} |", pad(header, width)));
        out.push(rule.clone());
    }
    out.extend(rows.map(|r| format!("| {} |", pad(r, width))));
    out.push(rule);
    out.join("\n")
}

pub fn question_box(number: usize, question: &Question) -> String {
    let rows: Vec<String> = std::iter::once(format!("QUESTION {number}: {}", question.prompt()))
        .chain(
            question
                .answers()
                .iter()
                .enumerate()
                .map(|(i, a)| format!("({}): {a}", i + 1)),
        )
        .collect();
    boxed(&rows)
}

pub fn banner(text: &str) -> String {
    let rule = "#".repeat(BANNER_WIDTH + 2);
    let inner = BANNER_WIDTH.saturating_sub(text.width());
    let left = inner / 2;
    format!(
        "{rule}\n#{}{text}{}#\n{rule}",
        " ".repeat(left),
        " ".repeat(inner - left)
    )
}

/// Categories in two columns, numbered from 1, with a trailing "Any" entry
pub fn category_menu(catalog: &Catalog) -> String {
    let labels: Vec<String> = catalog
        .categories
        .iter()
        .map(|c| c.to_string())
        .chain(std::iter::once("Any category".to_string()))
        .enumerate()
        .map(|(i, label)| format!("({}): {label}", i + 1))
        .collect();
    let column = labels.iter().map(|l| l.width()).max().unwrap_or(0);

    labels
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => format!("{} | {right}", pad(left, column)),
            [only] => only.clone(),
            _ => String::new(),
        })
        .join("\n")
}

pub fn difficulty_menu(catalog: &Catalog) -> String {
    catalog
        .difficulties
        .iter()
        .map(|d| d.to_string())
        .chain(std::iter::once("Any".to_string()))
        .enumerate()
        .map(|(i, d)| format!("{}) {d}", i + 1))
        .join(" | ")
}

pub fn results(report: &Report) -> String {
    let rows: Vec<String> = std::iter::once(format!("Results for {}", report.player_name))
        .chain(report.lines.iter().map(|l| l.to_string()))
        .collect();
    format!("{}\n\n{}", boxed(&rows), report.summary())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_box_lists_numbered_answers() {
        let q = Question::new(
            "Capital of France?",
            vec!["Paris".into(), "Rome".into()],
            "Paris",
        )
        .unwrap();
        let rendered = question_box(3, &q);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("| QUESTION 3: Capital of France?"));
        assert!(lines[3].starts_with("| (1): "));
        assert!(lines[4].starts_with("| (2): "));
        assert!(lines.iter().all(|l| l.width() == lines[0].width()));
    }

    #[test]
    fn test_boxed_grows_with_long_rows() {
        let long = "x".repeat(90);
        let rendered = boxed(&[long.clone()]);
        assert!(rendered.lines().nth(1).unwrap().contains(&long));
        assert_eq!(rendered.lines().next().unwrap().width(), 94);
    }

    #[test]
    fn test_banner_is_centered() {
        let b = banner("Let us Begin!");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].width(), lines[0].width());
        assert!(lines[1].contains("Let us Begin!"));
    }

    #[test]
    fn test_category_menu_has_any_entry() {
        let menu = category_menu(&Catalog::standard());
        assert_eq!(menu.lines().count(), 6);
        assert!(menu.contains("(1): Arts & Literature"));
        assert!(menu.contains("(11): Any category"));
    }

    #[test]
    fn test_difficulty_menu() {
        assert_eq!(
            difficulty_menu(&Catalog::standard()),
            "1) Easy | 2) Medium | 3) Hard | 4) Any"
        );
    }
}
