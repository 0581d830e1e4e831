use regex::Regex;
use std::sync::OnceLock;

use crate::error::FieldError;
use crate::orders::{ContactForm, GameServer, OrderContact};
use crate::pricing::calculator::{is_priceable, MINIMUM_QUANTITY_MILLIONS};
use crate::pricing::{CreditTier, TankClass};

const MIN_DISCORD_TAG_LEN: usize = 3;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Check the contact fields, appending every problem to `errors`.
///
/// Returns the cleaned-up contact only when all fields passed.
pub fn validate_contact(
    form: &ContactForm,
    errors: &mut Vec<FieldError>,
) -> Option<OrderContact> {
    let before = errors.len();

    let email = form.email.trim();
    if !is_valid_email(email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    let discord_tag = form.discord_tag.trim();
    if discord_tag.chars().count() < MIN_DISCORD_TAG_LEN {
        errors.push(FieldError::new("discord_tag", "Please enter your Discord tag"));
    }

    let server = if form.server.trim().is_empty() {
        errors.push(FieldError::new("server", "Please select a server"));
        None
    } else {
        match form.server.parse::<GameServer>() {
            Ok(server) => Some(server),
            Err(message) => {
                errors.push(FieldError::new("server", message));
                None
            }
        }
    };

    let additional_info = form
        .additional_info
        .as_deref()
        .map(str::trim)
        .filter(|info| !info.is_empty())
        .map(str::to_string);

    match server {
        Some(server) if errors.len() == before => Some(OrderContact {
            email: email.to_string(),
            discord_tag: discord_tag.to_string(),
            server,
            additional_info,
        }),
        _ => None,
    }
}

pub fn validate_quantity(
    tier: CreditTier,
    quantity_millions: f64,
    exclude_own_boosters: bool,
    errors: &mut Vec<FieldError>,
) {
    if !quantity_millions.is_finite() || quantity_millions < MINIMUM_QUANTITY_MILLIONS {
        errors.push(FieldError::new(
            "quantity_millions",
            "Minimum 1 million credits required",
        ));
    } else if !is_priceable(tier, quantity_millions, exclude_own_boosters) {
        errors.push(FieldError::new("quantity_millions", "Amount is too large"));
    }
}

pub fn validate_tank_class(
    tank_class: Option<TankClass>,
    errors: &mut Vec<FieldError>,
) -> Option<TankClass> {
    if tank_class.is_none() {
        errors.push(FieldError::new("tank_class", "Please select a tank type"));
    }
    tank_class
}
