/// Derived-view computation
///
/// The rendered list is never stored as primary state: it is recomputed
/// from scratch, as a pure function of the dataset and the filter inputs,
/// after every state-changing event.

use std::collections::HashMap;

use super::data::User;

/// The three filter inputs bound to the UI controls
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Case-insensitive substring matched against first or last name
    pub name: String,
    /// Exact city name; empty means "all cities"
    pub city: String,
    /// Mark the oldest user of each city in the filtered set
    pub highlight_oldest: bool,
}

/// One row of the rendered list: a user plus a transient highlight mark
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    pub user: User,
    pub highlight: bool,
}

/// Compute the view entries for the current dataset and filters.
///
/// Three sequential passes: name filter, city filter, highlight
/// annotation. Records keep their original fetch order throughout;
/// filtering only removes rows, never reorders them.
pub fn derive_view(users: &[User], filters: &Filters) -> Vec<ViewEntry> {
    let mut filtered: Vec<&User> = users.iter().collect();

    if !filters.name.is_empty() {
        let needle = filters.name.to_lowercase();
        filtered.retain(|user| {
            user.first_name.to_lowercase().contains(&needle)
                || user.last_name.to_lowercase().contains(&needle)
        });
    }

    if !filters.city.is_empty() {
        filtered.retain(|user| user.address.city == filters.city);
    }

    // The highlight pass runs over the already-filtered records
    let oldest_per_city = if filters.highlight_oldest {
        oldest_ids_per_city(&filtered)
    } else {
        HashMap::new()
    };

    filtered
        .into_iter()
        .map(|user| ViewEntry {
            highlight: oldest_per_city.get(user.city()) == Some(&user.id),
            user: user.clone(),
        })
        .collect()
}

/// Find, per city, the id of the record with the maximum age.
/// On equal ages the record scanned last wins.
fn oldest_ids_per_city(users: &[&User]) -> HashMap<String, u64> {
    let mut oldest: HashMap<String, (u32, u64)> = HashMap::new();

    for user in users {
        match oldest.get(user.city()) {
            Some(&(age, _)) if user.age < age => {}
            _ => {
                oldest.insert(user.city().to_string(), (user.age, user.id));
            }
        }
    }

    oldest
        .into_iter()
        .map(|(city, (_, id))| (city, id))
        .collect()
}

/// Distinct city names present in the full dataset, in first-seen order.
///
/// Always computed from the raw dataset, so the selector never shrinks
/// to the cities of the currently filtered view.
pub fn cities(users: &[User]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();

    for user in users {
        if !cities.iter().any(|city| city == user.city()) {
            cities.push(user.city().to_string());
        }
    }

    cities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Address;

    fn user(id: u64, first: &str, last: &str, age: u32, city: &str) -> User {
        User {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            age,
            birth_date: "1990-01-01".to_string(),
            address: Address {
                city: city.to_string(),
            },
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Emily", "Johnson", 28, "Phoenix"),
            user(2, "Oliver", "Smith", 45, "Boston"),
            user(3, "Noah", "Williams", 30, "East Boston"),
            user(4, "Ava", "Brown", 45, "Boston"),
        ]
    }

    #[test]
    fn test_empty_filters_return_full_set_in_order() {
        let users = sample();
        let view = derive_view(&users, &Filters::default());

        let ids: Vec<u64> = view.iter().map(|entry| entry.user.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(view.iter().all(|entry| !entry.highlight));
    }

    #[test]
    fn test_name_filter_is_case_insensitive_substring() {
        let users = sample();
        let filters = Filters {
            name: "li".to_string(),
            ..Filters::default()
        };

        // "li" is a substring of both "Emily" and "Oliver"
        let view = derive_view(&users, &filters);
        let ids: Vec<u64> = view.iter().map(|entry| entry.user.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_name_filter_matches_last_name_too() {
        let users = sample();
        let filters = Filters {
            name: "SMITH".to_string(),
            ..Filters::default()
        };

        let view = derive_view(&users, &filters);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].user.id, 2);
    }

    #[test]
    fn test_city_filter_is_exact_match() {
        let users = sample();
        let filters = Filters {
            city: "Boston".to_string(),
            ..Filters::default()
        };

        // "East Boston" must not match the "Boston" selection
        let view = derive_view(&users, &filters);
        let ids: Vec<u64> = view.iter().map(|entry| entry.user.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_no_matches_yields_empty_view() {
        let users = sample();
        let filters = Filters {
            name: "zzz".to_string(),
            ..Filters::default()
        };

        assert!(derive_view(&users, &filters).is_empty());
    }

    #[test]
    fn test_empty_dataset_yields_empty_view() {
        assert!(derive_view(&[], &Filters::default()).is_empty());
    }

    #[test]
    fn test_highlight_tie_goes_to_last_scanned_record() {
        let users = vec![
            user(1, "Amy", "Adams", 30, "X"),
            user(2, "Ben", "Baker", 45, "X"),
            user(3, "Cal", "Cole", 45, "X"),
        ];
        let filters = Filters {
            highlight_oldest: true,
            ..Filters::default()
        };

        let view = derive_view(&users, &filters);
        let flags: Vec<bool> = view.iter().map(|entry| entry.highlight).collect();
        assert_eq!(flags, vec![false, false, true]);
    }

    #[test]
    fn test_highlight_is_per_city() {
        let users = sample();
        let filters = Filters {
            highlight_oldest: true,
            ..Filters::default()
        };

        let view = derive_view(&users, &filters);
        let flagged: Vec<u64> = view
            .iter()
            .filter(|entry| entry.highlight)
            .map(|entry| entry.user.id)
            .collect();

        // One oldest record for each of Phoenix, Boston and East Boston
        assert_eq!(flagged, vec![1, 3, 4]);
    }

    #[test]
    fn test_highlight_single_record_city() {
        let users = sample();
        let filters = Filters {
            city: "East Boston".to_string(),
            highlight_oldest: true,
            ..Filters::default()
        };

        // A lone record is trivially its city's maximum
        let view = derive_view(&users, &filters);
        assert_eq!(view.len(), 1);
        assert!(view[0].highlight);
    }

    #[test]
    fn test_derivation_is_pure() {
        let users = sample();
        let filters = Filters {
            name: "o".to_string(),
            highlight_oldest: true,
            ..Filters::default()
        };

        assert_eq!(derive_view(&users, &filters), derive_view(&users, &filters));
    }

    #[test]
    fn test_cities_are_distinct_in_first_seen_order() {
        let mut users = sample();
        users.push(user(5, "Mia", "Davis", 22, "Phoenix"));

        assert_eq!(cities(&users), vec!["Phoenix", "Boston", "East Boston"]);
    }
}
