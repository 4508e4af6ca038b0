use rand::Rng;

pub const API_BASE_URL: &str = "https://superheroapi.com";

/// Highest identifier in the catalog. Identifiers run from 1 up to this value.
pub const MAX_HERO_ID: u32 = 731;

pub fn api_hero(base: &str, key: &str, id: u32) -> String {
    format!("{base}/api/{key}/{id}")
}

/// Same as [`api_hero`] with the key masked, for logs.
pub fn api_hero_redacted(base: &str, id: u32) -> String {
    format!("{base}/api/***/{id}")
}

pub fn random_hero_id<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(1..=MAX_HERO_ID)
}
