//! Canonical bag order: driver, woods, hybrids, irons, wedges by loft.
//!
//! Labels are free text ("7i", "7 Iron (Blue)", "54°", "Gap Wedge"), so the
//! order is read from the label each time instead of being stored.

use crate::consts::{UNKNOWN_CLUB_RANK_BASE, UNKNOWN_CLUB_SLOTS};
use fnv::FnvHasher;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum ClubCategory {
    Driver,
    Wood,
    Hybrid,
    Iron,
    Wedge,
    Unknown,
}

const WOOD_BASE: u32 = 10;
const HYBRID_BASE: u32 = 20;
const IRON_BASE: u32 = 30;
const WEDGE_BASE: u32 = 100;

// Conventional lofts for lettered wedges.
const PITCHING_LOFT: u32 = 46;
const GAP_LOFT: u32 = 50;
const SAND_LOFT: u32 = 56;
const LOB_LOFT: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClubRank {
    pub category: ClubCategory,
    pub rank: u32,
}

/// Places a club label in the bag.
pub fn classify(label: &str) -> ClubRank {
    let tokens = tokenize(label);
    let has = |words: &[&str]| tokens.iter().any(|t| words.contains(&t.as_str()));
    let number = tokens.iter().find_map(|t| t.parse::<u32>().ok());

    let known = |category, rank| ClubRank { category, rank };

    if has(&["driver", "dr", "drv"]) || (number == Some(1) && has(&["w", "wood"])) {
        return known(ClubCategory::Driver, 0);
    }
    if has(&["wood", "w", "fw", "fairway"]) {
        return known(ClubCategory::Wood, WOOD_BASE + number.unwrap_or(3).min(9));
    }
    if has(&["hybrid", "h", "hy", "hyb", "rescue"]) {
        return known(ClubCategory::Hybrid, HYBRID_BASE + number.unwrap_or(4).min(9));
    }
    if has(&["iron", "i"]) {
        if let Some(n) = number.filter(|n| (1..=9).contains(n)) {
            return known(ClubCategory::Iron, IRON_BASE + n);
        }
    }
    if let Some(loft) = wedge_loft(&tokens, number) {
        return known(ClubCategory::Wedge, WEDGE_BASE + loft);
    }
    if tokens.len() == 1 {
        if let Some(n) = number.filter(|n| (1..=9).contains(n)) {
            return known(ClubCategory::Iron, IRON_BASE + n);
        }
    }

    ClubRank {
        category: ClubCategory::Unknown,
        rank: unknown_rank(label),
    }
}

pub fn club_rank(label: &str) -> u32 {
    classify(label).rank
}

/// Bag order, then the label itself so equal ranks stay stable.
pub fn compare_clubs(a: &str, b: &str) -> Ordering {
    club_rank(a).cmp(&club_rank(b)).then_with(|| a.cmp(b))
}

pub fn sort_by_bag_order<T, F>(items: &mut [T], label: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| compare_clubs(label(a), label(b)));
}

fn wedge_loft(tokens: &[String], number: Option<u32>) -> Option<u32> {
    let has = |words: &[&str]| tokens.iter().any(|t| words.contains(&t.as_str()));

    // Bare letters only count when they are the whole label ("P", "S").
    let lone = |letter: &str| tokens.len() == 1 && tokens[0] == letter;

    if has(&["pw", "pitching", "pitch"]) || lone("p") {
        return Some(PITCHING_LOFT);
    }
    if has(&["gw", "aw", "uw", "gap", "approach"]) || lone("a") || lone("g") {
        return Some(GAP_LOFT);
    }
    if has(&["sw", "sand"]) || lone("s") {
        return Some(SAND_LOFT);
    }
    if has(&["lw", "lob"]) || lone("l") {
        return Some(LOB_LOFT);
    }
    // "52", "54°", "58 deg wedge"
    number.filter(|n| (40..=70).contains(n))
}

fn unknown_rank(label: &str) -> u32 {
    let mut hasher = FnvHasher::default();
    label.trim().to_lowercase().hash(&mut hasher);
    UNKNOWN_CLUB_RANK_BASE + (hasher.finish() % UNKNOWN_CLUB_SLOTS) as u32
}

/// Lowercase alphanumeric runs, split where digits meet letters:
/// `"7 Iron (Blue)"` -> `["7", "iron"]`, `"3W"` -> `["3", "w"]`.
fn tokenize(label: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    let flush = |current: &mut String, tokens: &mut Vec<String>| {
        if !current.is_empty() {
            tokens.push(std::mem::take(current));
        }
    };

    for c in label.chars() {
        match c {
            '(' | '[' => {
                flush(&mut current, &mut tokens);
                depth += 1;
            }
            ')' | ']' => depth = depth.saturating_sub(1),
            _ if depth > 0 => {}
            c if c.is_ascii_alphanumeric() => {
                let switches = current
                    .chars()
                    .last()
                    .is_some_and(|p| p.is_ascii_digit() != c.is_ascii_digit());
                if switches {
                    flush(&mut current, &mut tokens);
                }
                current.push(c.to_ascii_lowercase());
            }
            _ => flush(&mut current, &mut tokens),
        }
    }
    flush(&mut current, &mut tokens);
    tokens
}
