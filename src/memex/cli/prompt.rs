//! Numbered menus for `memex new --interactive`.
//!
//! Menus are drawn on stderr so stdout stays clean. Answers are 1-based
//! numbers; a blank answer keeps the preselection.

use console::{Style, Term};
use std::io;

/// Parse a single-choice answer into a 0-based index.
pub fn parse_single(input: &str, count: usize, default: usize) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(format!("Enter a number between 1 and {}", count)),
    }
}

/// Parse a multi-choice answer ("1,3 4") into 0-based indexes, first occurrence order.
/// `none` clears the selection.
pub fn parse_multi(input: &str, count: usize, checked: &[usize]) -> Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(checked.to_vec());
    }
    if input.eq_ignore_ascii_case("none") {
        return Ok(Vec::new());
    }

    let mut picked = Vec::new();
    for token in input.split([',', ' ']).filter(|t| !t.is_empty()) {
        let index = parse_single(token, count, 0)?;
        if !picked.contains(&index) {
            picked.push(index);
        }
    }
    Ok(picked)
}

fn draw_options(term: &Term, options: &[String], marked: &[usize]) -> io::Result<()> {
    let number = Style::new().cyan();
    for (i, option) in options.iter().enumerate() {
        let mark = if marked.contains(&i) { "*" } else { " " };
        term.write_line(&format!(
            "{} {} {}",
            mark,
            number.apply_to(format!("{:>2})", i + 1)),
            option
        ))?;
    }
    Ok(())
}

pub fn select_one(term: &Term, title: &str, options: &[String], default: usize) -> io::Result<usize> {
    let heading = Style::new().bold();
    term.write_line(&heading.apply_to(title).to_string())?;
    draw_options(term, options, &[default])?;

    loop {
        term.write_str(&format!("Choose [{}]: ", default + 1))?;
        match parse_single(&term.read_line()?, options.len(), default) {
            Ok(index) => return Ok(index),
            Err(hint) => term.write_line(&hint)?,
        }
    }
}

pub fn select_many(
    term: &Term,
    title: &str,
    options: &[String],
    checked: &[usize],
) -> io::Result<Vec<usize>> {
    let heading = Style::new().bold();
    term.write_line(&heading.apply_to(title).to_string())?;
    draw_options(term, options, checked)?;

    loop {
        term.write_str("Numbers separated by commas, blank keeps *, 'none' clears: ")?;
        match parse_multi(&term.read_line()?, options.len(), checked) {
            Ok(picked) => return Ok(picked),
            Err(hint) => term.write_line(&hint)?,
        }
    }
}
