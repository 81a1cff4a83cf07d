//! Text helpers shared by the information renderer.

use herobldr_domain::{DamageModifier, Modifier};

pub fn signed(value: i32) -> String {
    if value >= 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}

/// Describe a bonus modifier, e.g. `+2, +1 per level`.
pub fn modifier(modifier: &Modifier) -> String {
    let mut parts = Vec::new();

    if modifier.value != 0 || modifier.value_characteristics.is_empty() {
        parts.push(signed(modifier.value));
    }
    if !modifier.value_characteristics.is_empty() {
        let names: Vec<String> = modifier
            .value_characteristics
            .iter()
            .map(ToString::to_string)
            .collect();
        parts.push(format!("+{}", names.join(" or ")));
    }
    if modifier.value_per_level != 0 {
        parts.push(format!("{} per level", signed(modifier.value_per_level)));
    }
    if modifier.value_per_echelon != 0 {
        parts.push(format!("{} per echelon", signed(modifier.value_per_echelon)));
    }

    // A bare "+0" only makes sense when nothing else scales
    if parts.len() > 1 && modifier.value == 0 {
        parts.retain(|p| p != "+0");
    }
    parts.join(", ")
}

/// Describe an immunity or weakness, e.g. `fire immunity 5`.
pub fn damage_modifier(modifier: &DamageModifier) -> String {
    let mut text = format!(
        "{} {} {}",
        modifier.damage_type, modifier.modifier_type, modifier.value
    );
    if modifier.value_per_level != 0 {
        text.push_str(&format!(", {} per level", signed(modifier.value_per_level)));
    }
    text
}

pub fn starts_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .map(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .unwrap_or(false)
}

/// Prefix `noun` with the right indefinite article.
pub fn with_article(noun: &str) -> String {
    if starts_with_vowel(noun) {
        format!("an {}", noun)
    } else {
        format!("a {}", noun)
    }
}

/// `"Choose 2 perks"` / `"Choose a perk"` style phrasing.
pub fn count_phrase(count: u32, singular: &str, plural: &str) -> String {
    if count > 1 {
        format!("{} {}", count, plural)
    } else {
        format!("a {}", singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herobldr_domain::Characteristic;

    #[test]
    fn flat_modifiers_are_signed() {
        assert_eq!(modifier(&Modifier::flat(6)), "+6");
        assert_eq!(modifier(&Modifier::flat(-1)), "-1");
        assert_eq!(modifier(&Modifier::default()), "+0");
    }

    #[test]
    fn scaling_modifiers_list_every_part() {
        let per_echelon = Modifier {
            value_per_echelon: 3,
            ..Default::default()
        };
        assert_eq!(modifier(&per_echelon), "+3 per echelon");

        let mixed = Modifier {
            value: 2,
            value_per_level: 1,
            ..Default::default()
        };
        assert_eq!(modifier(&mixed), "+2, +1 per level");

        let characteristic = Modifier {
            value_characteristics: vec![Characteristic::Might],
            ..Default::default()
        };
        assert_eq!(modifier(&characteristic), "+Might");
    }

    #[test]
    fn damage_modifiers() {
        assert_eq!(damage_modifier(&DamageModifier::immunity("fire", 5)), "fire immunity 5");

        let mut weakness = DamageModifier::weakness("holy", 3);
        weakness.value_per_level = 1;
        assert_eq!(damage_modifier(&weakness), "holy weakness 3, +1 per level");
    }

    #[test]
    fn articles() {
        assert_eq!(with_article("Artifact"), "an Artifact");
        assert_eq!(with_article("Leveled Treasure"), "a Leveled Treasure");
        assert!(!starts_with_vowel(""));
        assert_eq!(count_phrase(1, "perk", "perks"), "a perk");
        assert_eq!(count_phrase(3, "perk", "perks"), "3 perks");
    }
}
