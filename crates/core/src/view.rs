//! View parameters and the filter/sort/paginate pipeline
//!
//! The pipeline is a pure function of the fetched catalog and the
//! user-selected view parameters. It is re-evaluated from scratch on every
//! invocation; there is no state carried between calls.

use serde::Serialize;

use crate::model::{ParseError, Pokemon, StatName, TYPE_VOCABULARY};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Sort key: by name, or descending by one of the six stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Stat(StatName),
}

impl std::str::FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("name") {
            return Ok(SortKey::Name);
        }
        s.parse::<StatName>()
            .map(SortKey::Stat)
            .map_err(|_| ParseError::UnknownSort(s.to_string()))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Name => f.write_str("name"),
            SortKey::Stat(stat) => f.write_str(stat.as_str()),
        }
    }
}

/// Minimum-stat filter; a minimum of 0 disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatFilter {
    pub stat: StatName,
    pub min: u32,
}

/// User-selected view parameters for one catalog session.
#[derive(Debug, Clone)]
pub struct ViewParams {
    /// Case-insensitive substring match against item names.
    pub search: String,
    /// Exact match against the item's type tags.
    pub selected_type: Option<String>,
    pub stat_filter: StatFilter,
    pub sort: SortKey,
    /// 1-based; 0 is treated as 1, pages past the end yield an empty slice.
    pub page: usize,
    pub per_page: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search: String::new(),
            selected_type: None,
            stat_filter: StatFilter {
                stat: StatName::Attack,
                min: 0,
            },
            sort: SortKey::Name,
            page: 1,
            per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Check a user-supplied type label against the known vocabulary.
pub fn validate_type(ty: &str) -> Result<(), ParseError> {
    if TYPE_VOCABULARY.contains(&ty) {
        Ok(())
    } else {
        Err(ParseError::UnknownType(ty.to_string()))
    }
}

/// Total number of pages for a filtered count.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1))
}

/// Slice bounds for the requested page, clamped to the filtered count.
///
/// Page 0 is treated as page 1; a page past the end produces an empty
/// `(total, total)` range rather than an error.
pub fn page_bounds(total_items: usize, page: usize, per_page: usize) -> (usize, usize) {
    let page = page.max(1);
    let start = ((page - 1).saturating_mul(per_page)).min(total_items);
    let end = (start + per_page).min(total_items);
    (start, end)
}

/// Compute the visible page of the catalog.
///
/// Applies, in order: type filter, text filter, stat filter, sort,
/// pagination. Returns the page slice and the total filtered count, which
/// is independent of the sort key and the requested page.
pub fn visible<'a>(items: &'a [Pokemon], params: &ViewParams) -> (Vec<&'a Pokemon>, usize) {
    let search = params.search.to_lowercase();

    let mut filtered: Vec<&Pokemon> = items
        .iter()
        .filter(|item| match &params.selected_type {
            Some(ty) => item.has_type(ty),
            None => true,
        })
        .filter(|item| search.is_empty() || item.name.to_lowercase().contains(&search))
        .filter(|item| {
            params.stat_filter.min == 0
                || item.stat_value(params.stat_filter.stat) > params.stat_filter.min
        })
        .collect();

    // Vec::sort_by is stable, so ties keep their fetched order
    match params.sort {
        SortKey::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Stat(stat) => filtered.sort_by(|a, b| b.stat_value(stat).cmp(&a.stat_value(stat))),
    }

    let total = filtered.len();
    let (start, end) = page_bounds(total, params.page, params.per_page);
    (filtered[start..end].to_vec(), total)
}

/// Individual list entry output
#[derive(Debug, Serialize, Clone)]
pub struct ListEntry {
    pub id: u32,
    pub name: String,
    pub types: Vec<String>,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
    pub base_experience: Option<u32>,
    pub height: Option<u32>,
    pub sprite: Option<String>,
}

/// Pagination metadata for list output
#[derive(Debug, Serialize, Clone)]
pub struct ListPaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete list output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct ListOutput {
    pub items: Vec<ListEntry>,
    pub pagination: ListPaginationInfo,
}

/// Run the pipeline and shape the visible page into list output with
/// pagination metadata and navigation commands.
pub fn transform_catalog_page(items: &[Pokemon], params: &ViewParams) -> ListOutput {
    let (page_items, total_items) = visible(items, params);

    let entries: Vec<ListEntry> = page_items
        .iter()
        .map(|item| ListEntry {
            id: item.id,
            name: item.name.clone(),
            types: item.type_names().iter().map(|t| t.to_string()).collect(),
            hp: item.stat_value(StatName::Hp),
            attack: item.stat_value(StatName::Attack),
            defense: item.stat_value(StatName::Defense),
            special_attack: item.stat_value(StatName::SpecialAttack),
            special_defense: item.stat_value(StatName::SpecialDefense),
            speed: item.stat_value(StatName::Speed),
            base_experience: item.base_experience,
            height: item.height,
            sprite: item.front_sprite(),
        })
        .collect();

    let page = params.page.max(1);
    let total_pages = total_pages(total_items, params.per_page);

    let next_page = if page < total_pages {
        Some(format!("pokedex list --page {}", page + 1))
    } else {
        None
    };

    let prev_page = if page > 1 {
        Some(format!("pokedex list --page {}", page - 1))
    } else {
        None
    };

    ListOutput {
        items: entries,
        pagination: ListPaginationInfo {
            current_page: page,
            total_pages,
            total_items,
            per_page: params.per_page,
            next_page_command: next_page,
            prev_page_command: prev_page,
        },
    }
}
