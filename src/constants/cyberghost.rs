//! Cyberghost server groups and regions

/// Values accepted in `CYBERGHOST_GROUP`
pub const CYBERGHOST_GROUPS: &[&str] = &[
    "Premium UDP Europe",
    "Premium UDP USA",
    "Premium UDP Asia",
    "NoSpy UDP Europe",
    "Premium TCP Europe",
    "Premium TCP USA",
    "Premium TCP Asia",
    "NoSpy TCP Europe",
];

/// Values accepted in `REGION` for Cyberghost
pub const CYBERGHOST_REGIONS: &[&str] = &[
    "Albania",
    "Algeria",
    "Andorra",
    "Argentina",
    "Armenia",
    "Australia",
    "Austria",
    "Bahamas",
    "Bangladesh",
    "Belarus",
    "Belgium",
    "Bosnia and Herzegovina",
    "Brazil",
    "Bulgaria",
    "Cambodia",
    "Canada",
    "Chile",
    "China",
    "Colombia",
    "Costa Rica",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Egypt",
    "Estonia",
    "Finland",
    "France",
    "Georgia",
    "Germany",
    "Greece",
    "Greenland",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Iran",
    "Ireland",
    "Isle of Man",
    "Israel",
    "Italy",
    "Japan",
    "Kazakhstan",
    "Kenya",
    "Latvia",
    "Liechtenstein",
    "Lithuania",
    "Luxembourg",
    "Macao",
    "Macedonia",
    "Malaysia",
    "Malta",
    "Mexico",
    "Moldova",
    "Monaco",
    "Mongolia",
    "Montenegro",
    "Morocco",
    "Netherlands",
    "New Zealand",
    "Nigeria",
    "Norway",
    "Pakistan",
    "Panama",
    "Philippines",
    "Poland",
    "Portugal",
    "Qatar",
    "Romania",
    "Russian Federation",
    "Saudi Arabia",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "Spain",
    "Sri Lanka",
    "Sweden",
    "Switzerland",
    "Taiwan",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
    "United States",
    "Venezuela",
    "Vietnam",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_group_is_listed() {
        assert!(CYBERGHOST_GROUPS.contains(&crate::params::defaults::CYBERGHOST_GROUP_DEFAULT));
    }

    #[test]
    fn test_regions_are_sorted_and_unique() {
        let mut sorted = CYBERGHOST_REGIONS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted, CYBERGHOST_REGIONS.to_vec());
    }
}
