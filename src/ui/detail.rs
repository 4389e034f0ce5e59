//! Detail pane content.
//!
//! Turns a [`Spell`] into wrapped, styled lines for the detail surface. The line
//! count also bounds how far the pane can be scrolled.

use super::helpers::wrap_text;
use super::viewmodel::{DetailLine, LineStyle};
use crate::domain::Spell;

/// Text shown in the detail pane before any spell is picked.
pub const PLACEHOLDER: &str = "Select a spell with Enter to see its details.";

/// Builds the full (unscrolled) detail content for `spell`, wrapped to `width`.
///
/// # Example
///
/// ```rust
/// use spellbook::ui::detail::detail_lines;
/// use spellbook::Spell;
///
/// let mut spell = Spell::new("Fireball", 3, false, false);
/// spell.school = "Evocation".to_string();
/// let lines = detail_lines(&spell, 40);
/// assert_eq!(lines[0].text, "Fireball");
/// assert_eq!(lines[1].text, "3rd-level evocation");
/// ```
#[must_use]
pub fn detail_lines(spell: &Spell, width: usize) -> Vec<DetailLine> {
    let mut lines = Vec::new();

    push_wrapped(&mut lines, &spell.name, width, LineStyle::Title);
    push_wrapped(&mut lines, &subtitle(spell), width, LineStyle::Subtitle);
    blank(&mut lines);

    let duration = if spell.concentration && !starts_with_concentration(&spell.duration) {
        if spell.duration.is_empty() {
            "Concentration".to_string()
        } else {
            format!("Concentration, {}", spell.duration)
        }
    } else {
        spell.duration.clone()
    };

    let classes = spell.classes.join(", ");
    let fields = [
        ("Casting Time", spell.casting_time.as_str()),
        ("Range", spell.range.as_str()),
        ("Components", spell.components.as_str()),
        ("Duration", duration.as_str()),
        ("Classes", classes.as_str()),
    ];
    let mut any_field = false;
    for (name, value) in fields {
        if !value.is_empty() {
            push_wrapped(&mut lines, &format!("{name}: {value}"), width, LineStyle::Field);
            any_field = true;
        }
    }
    if any_field {
        blank(&mut lines);
    }

    push_paragraphs(&mut lines, &spell.description, width);

    if !spell.higher_level.is_empty() {
        push_wrapped(&mut lines, "At Higher Levels", width, LineStyle::Heading);
        push_paragraphs(&mut lines, &spell.higher_level, width);
    }

    while lines.last().is_some_and(|l| l.text.is_empty()) {
        lines.pop();
    }

    lines
}

/// Placeholder content for an empty detail pane.
#[must_use]
pub fn placeholder_lines(width: usize) -> Vec<DetailLine> {
    let mut lines = Vec::new();
    push_wrapped(&mut lines, PLACEHOLDER, width, LineStyle::Hint);
    lines
}

fn subtitle(spell: &Spell) -> String {
    let school = spell.school.trim();
    let mut text = match (spell.level, school.is_empty()) {
        (0, true) => "Cantrip".to_string(),
        (0, false) => format!("{school} cantrip"),
        (_, true) => spell.level_label(),
        (_, false) => format!("{} {}", spell.level_label(), school.to_lowercase()),
    };
    if spell.ritual {
        text.push_str(" (ritual)");
    }
    text
}

fn starts_with_concentration(duration: &str) -> bool {
    duration
        .get(..13)
        .is_some_and(|head| head.eq_ignore_ascii_case("concentration"))
}

fn push_paragraphs(lines: &mut Vec<DetailLine>, paragraphs: &[String], width: usize) {
    for paragraph in paragraphs {
        push_wrapped(lines, paragraph, width, LineStyle::Body);
        blank(lines);
    }
}

fn push_wrapped(lines: &mut Vec<DetailLine>, text: &str, width: usize, style: LineStyle) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|text| DetailLine { text, style }),
    );
}

fn blank(lines: &mut Vec<DetailLine>) {
    lines.push(DetailLine {
        text: String::new(),
        style: LineStyle::Body,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bestow_curse() -> Spell {
        Spell {
            school: "Necromancy".into(),
            casting_time: "1 action".into(),
            range: "Touch".into(),
            components: "V, S".into(),
            duration: "up to 1 minute".into(),
            description: vec!["You touch a creature.".into()],
            higher_level: vec!["The duration grows.".into()],
            classes: vec!["Bard".into(), "Cleric".into()],
            ..Spell::new("Bestow Curse", 3, false, true)
        }
    }

    fn texts(lines: &[DetailLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn lays_out_all_sections() {
        let lines = detail_lines(&bestow_curse(), 60);
        assert_eq!(
            texts(&lines),
            vec![
                "Bestow Curse",
                "3rd-level necromancy",
                "",
                "Casting Time: 1 action",
                "Range: Touch",
                "Components: V, S",
                "Duration: Concentration, up to 1 minute",
                "Classes: Bard, Cleric",
                "",
                "You touch a creature.",
                "",
                "At Higher Levels",
                "The duration grows.",
            ]
        );
        assert_eq!(lines[0].style, LineStyle::Title);
        assert_eq!(lines[11].style, LineStyle::Heading);
    }

    #[test]
    fn concentration_prefix_not_duplicated() {
        let mut spell = bestow_curse();
        spell.duration = "Concentration, up to 1 minute".into();
        let lines = detail_lines(&spell, 60);
        assert!(texts(&lines).contains(&"Duration: Concentration, up to 1 minute"));
    }

    #[test]
    fn cantrip_and_ritual_subtitles() {
        let mut light = Spell::new("Light", 0, false, false);
        light.school = "Evocation".into();
        assert_eq!(detail_lines(&light, 40)[1].text, "Evocation cantrip");

        let alarm = Spell::new("Alarm", 1, true, false);
        assert_eq!(detail_lines(&alarm, 40)[1].text, "1st-level (ritual)");
    }

    #[test]
    fn minimal_spell_has_no_trailing_blank() {
        let lines = detail_lines(&Spell::new("Wish", 9, false, false), 40);
        assert_eq!(texts(&lines), vec!["Wish", "9th-level"]);
    }

    #[test]
    fn long_description_wraps_to_width() {
        let mut spell = Spell::new("Fireball", 3, false, false);
        spell.description = vec!["A bright streak flashes from your pointing finger".into()];
        let lines = detail_lines(&spell, 20);
        assert!(lines.iter().all(|l| l.text.chars().count() <= 20));
        assert!(lines.len() > 4);
    }
}
