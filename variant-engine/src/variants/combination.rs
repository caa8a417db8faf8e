//! Combination Generator
//!
//! Cartesian product over the non-empty option slots of a product.

use shared::models::{Combination, ProductOption, VariantOption};

/// Generate every combination of one value per non-empty option
///
/// Options without values are skipped. When no option has values the
/// result is empty (the product has no variants), never a single empty
/// combination.
///
/// Output order is stable: the first option varies slowest, values follow
/// their list order. `Color=[Red, Blue], Size=[S, M]` yields
/// `Red/S, Red/M, Blue/S, Blue/M`.
pub fn generate_combinations(options: &[ProductOption]) -> Vec<Combination> {
    let active: Vec<&ProductOption> = options.iter().filter(|o| !o.is_empty()).collect();
    if active.is_empty() {
        return Vec::new();
    }

    active
        .into_iter()
        .fold(vec![Vec::new()], |partials: Vec<Combination>, option| {
            let mut next = Vec::with_capacity(partials.len() * option.values.len());
            for partial in &partials {
                for value in &option.values {
                    let mut combination = partial.clone();
                    combination.push(VariantOption::new(option.name, value.clone()));
                    next.push(combination);
                }
            }
            next
        })
}

/// Number of combinations `generate_combinations` would produce
pub fn combination_count(options: &[ProductOption]) -> usize {
    let mut active = options.iter().filter(|o| !o.is_empty()).peekable();
    if active.peek().is_none() {
        return 0;
    }
    active.map(|o| o.values.len()).product()
}
