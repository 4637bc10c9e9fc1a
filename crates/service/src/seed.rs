//! Synthetic data for local development.
//!
//! Replaces the whole `companies` table with freshly generated rows in one
//! transaction. Not reachable from the HTTP surface.

use chrono::{Duration, NaiveDate, Utc};
use models::company::{self, NewCompany};
use rand::seq::SliceRandom;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{info, instrument};

use crate::errors::ServiceError;

/// Generators for fake company fields.
pub mod fake {
    use super::*;

    /// Upper bound on generated company names, final period included.
    pub const MAX_NAME_CHARS: usize = 20;

    const WORDS: &[&str] = &[
        "agent", "air", "answer", "area", "art", "bank", "bed", "blue", "book", "car", "card", "case",
        "city", "cold", "court", "data", "deal", "door", "east", "energy", "fact", "field", "fire",
        "form", "game", "green", "ground", "group", "heart", "hotel", "house", "idea", "image",
        "iron", "land", "law", "light", "line", "market", "media", "model", "money", "north",
        "ocean", "office", "paper", "party", "peace", "plan", "point", "power", "rate", "river",
        "road", "rock", "rule", "school", "sea", "sense", "side", "sign", "sound", "south", "space",
        "star", "state", "stock", "stone", "store", "sun", "system", "table", "tree", "trade",
        "union", "value", "view", "wall", "water", "west", "wind", "wood", "world", "year",
    ];

    const FIRST_NAMES: &[&str] = &[
        "Aaron", "Alicia", "Andre", "Angela", "Brandon", "Brenda", "Carlos", "Catherine", "Daniel",
        "Diana", "Edward", "Elena", "Frank", "Gloria", "Gregory", "Hannah", "Isaac", "Jacob",
        "Jasmine", "Kevin", "Laura", "Marcus", "Maria", "Nathan", "Nicole", "Oscar", "Priya",
        "Rachel", "Samuel", "Sandra", "Thomas", "Vanessa", "Victor", "Wendy", "Zachary",
    ];

    const LAST_NAMES: &[&str] = &[
        "Adams", "Baker", "Bennett", "Brooks", "Campbell", "Carter", "Chen", "Collins", "Diaz",
        "Edwards", "Evans", "Fisher", "Garcia", "Gonzalez", "Hughes", "Jackson", "Kim", "Lopez",
        "Martinez", "Mitchell", "Morgan", "Nguyen", "Patel", "Perez", "Reed", "Rivera", "Robinson",
        "Sanders", "Shaw", "Stewart", "Thompson", "Turner", "Walker", "Watson", "Young",
    ];

    fn pick<'a, R: Rng + ?Sized>(rng: &mut R, list: &'a [&'a str]) -> &'a str {
        list.choose(rng).copied().unwrap_or("x")
    }

    /// Short capitalised sentence of at most [`MAX_NAME_CHARS`] characters ending in `.`.
    pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
        let budget = MAX_NAME_CHARS - 1;
        let mut words: Vec<&str> = vec![pick(rng, WORDS)];
        let mut len = words[0].len();
        loop {
            let next = pick(rng, WORDS);
            if len + 1 + next.len() > budget || rng.gen_bool(0.3) {
                break;
            }
            len += 1 + next.len();
            words.push(next);
        }
        let sentence = words.join(" ");
        let mut chars = sentence.chars();
        let mut out: String = chars.next().map(|c| c.to_ascii_uppercase()).into_iter().collect();
        out.extend(chars);
        out.push('.');
        out
    }

    /// "First Last".
    pub fn person_name<R: Rng + ?Sized>(rng: &mut R) -> String {
        format!("{} {}", pick(rng, FIRST_NAMES), pick(rng, LAST_NAMES))
    }

    /// Uniform date in `[1970-01-01, today]`.
    pub fn date_until<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
        let epoch = NaiveDate::default();
        let span = (today - epoch).num_days().max(0);
        epoch + Duration::days(rng.gen_range(0..=span))
    }
}

/// Build `count` synthetic companies dated no later than `today`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, count: usize, today: NaiveDate) -> Vec<NewCompany> {
    (0..count)
        .map(|_| NewCompany {
            name: Some(fake::company_name(rng)),
            founder: Some(fake::person_name(rng)),
            founding_date: fake::date_until(rng, today).and_hms_opt(0, 0, 0),
        })
        .collect()
}

/// Outcome of one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: u64,
    pub inserted: u64,
}

/// Delete every company and insert the given rows, all or nothing.
#[instrument(skip(db, rows), fields(count = rows.len()))]
pub async fn replace_all(db: &DatabaseConnection, rows: Vec<NewCompany>) -> Result<SeedReport, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Storage(e.to_string()))?;
    let deleted = company::delete_all(&txn).await?;
    let inserted = company::insert_many(&txn, rows).await?;
    txn.commit().await.map_err(|e| ServiceError::Storage(e.to_string()))?;
    info!(deleted, inserted, "companies_seeded");
    Ok(SeedReport { deleted, inserted })
}

/// Generate `count` rows with `rng` and replace the table contents with them.
pub async fn seed_companies<R: Rng + ?Sized>(
    db: &DatabaseConnection,
    count: usize,
    rng: &mut R,
) -> Result<SeedReport, ServiceError> {
    let rows = generate(rng, count, Utc::now().date_naive());
    replace_all(db, rows).await
}
