//! Scenarios over the embedded campaign dataset.

use campaign_seeker::{
    filter, loader, search, search_fields, Campaign, Catalog, Criteria, CriteriaPolicy,
    DateRange, Field, RawCriterion, SeekerError, Summary, DEFAULT_SEARCH_FIELDS,
};

fn catalog() -> Catalog {
    loader::load_embedded().expect("embedded dataset loads")
}

fn ids(results: &[&Campaign]) -> Vec<u32> {
    results.iter().map(|c| c.id()).collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn embedded_catalog_shape() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 20);
    let ids: Vec<u32> = catalog.iter().map(Campaign::id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}

#[test]
fn media_labels_are_translated() {
    let catalog = catalog();
    assert_eq!(
        catalog.get(2).unwrap().media(),
        &["Televisión", "Publicidad Exterior", "Digital"]
    );
    assert_eq!(
        catalog.get(3).unwrap().media(),
        &["Digital", "Redes Sociales"]
    );
    assert_eq!(
        catalog.get(7).unwrap().media(),
        &["Digital", "Publicidad Exterior", "Experiencial"]
    );
}

#[test]
fn option_lists() {
    let catalog = catalog();
    assert_eq!(
        catalog.media_channels(),
        vec![
            "Digital",
            "Experiencial",
            "Influencers",
            "Publicidad Exterior",
            "Radio",
            "Redes Sociales",
            "Televisión",
        ]
    );
    assert_eq!(catalog.agencies().len(), 9);
    assert_eq!(catalog.agencies()[0], "121 Latam");
    assert_eq!(catalog.sectors().len(), 11);

    let (min, max) = catalog.date_bounds().unwrap();
    assert_eq!(min.to_string(), "2022-06-20");
    assert_eq!(max.to_string(), "2024-06-01");
}

// ============================================================================
// Keyword search
// ============================================================================

#[test]
fn finanzas_keyword_only_hits_searched_text() {
    let catalog = catalog();
    let results = search_fields("finanzas", &DEFAULT_SEARCH_FIELDS, &catalog);
    // Sector is not searched; only "Microfinanzas solidarias" contains it.
    assert_eq!(ids(&results), vec![20]);

    let by_sector = search("finanzas", &["sector"], &catalog);
    assert_eq!(ids(&by_sector), vec![4, 9, 18, 20]);
}

#[test]
fn peru_keyword_is_union_of_fields() {
    let catalog = catalog();
    let by_name = search("Perú", &["name"], &catalog);
    let by_description = search("Perú", &["description"], &catalog);
    let both = search("Perú", &["name", "description"], &catalog);

    assert_eq!(ids(&by_name), vec![1, 10, 20]);
    assert_eq!(ids(&by_description), vec![1]);
    assert_eq!(ids(&both), vec![1, 10, 20]);
}

#[test]
fn keyword_in_recognition() {
    let catalog = catalog();
    let results = search_fields("cannes", &DEFAULT_SEARCH_FIELDS, &catalog);
    assert_eq!(ids(&results), vec![1, 5, 15, 19]);

    let results = search_fields("LIMA", &DEFAULT_SEARCH_FIELDS, &catalog);
    assert_eq!(ids(&results), vec![7, 12]);
}

#[test]
fn keyword_in_media() {
    let catalog = catalog();
    let results = search("sociales", &["media"], &catalog);
    assert_eq!(ids(&results), vec![3, 6, 9, 12, 18]);
}

#[test]
fn empty_keyword_returns_whole_catalog() {
    let catalog = catalog();
    let results = search_fields("", &DEFAULT_SEARCH_FIELDS, &catalog);
    assert_eq!(results.len(), catalog.len());
}

// ============================================================================
// Criteria filter
// ============================================================================

#[test]
fn bebidas_sector() {
    let catalog = catalog();
    let results = filter(&catalog, &Criteria::new().sector("Bebidas"));
    assert_eq!(ids(&results), vec![2, 5, 15]);
}

#[test]
fn bebidas_with_outdoor_media() {
    let catalog = catalog();
    let criteria = Criteria::new()
        .sector("Bebidas")
        .media(["Publicidad Exterior"]);
    // All three drinks campaigns carry OOH once translated.
    assert_eq!(ids(&filter(&catalog, &criteria)), vec![2, 5, 15]);

    // The raw label is not a channel any more.
    let raw = Criteria::new().sector("Bebidas").media(["OOH"]);
    assert!(filter(&catalog, &raw).is_empty());
}

#[test]
fn media_membership_is_inclusive_or() {
    let catalog = catalog();
    let criteria = Criteria::new().media(["Redes Sociales", "Influencers"]);
    assert_eq!(
        ids(&filter(&catalog, &criteria)),
        vec![3, 5, 6, 9, 11, 12, 14, 18]
    );

    let criteria = Criteria::new().media(["Radio"]);
    assert_eq!(ids(&filter(&catalog, &criteria)), vec![1]);
}

#[test]
fn year_2023_range() {
    let catalog = catalog();
    let range = DateRange::parse("2023-01-01", "2023-12-31").unwrap();
    let results = filter(&catalog, &Criteria::new().launch_between(range));

    assert_eq!(ids(&results), vec![1, 4, 6, 8, 10, 12, 14, 16, 19]);
    assert!(results.iter().all(|c| c.launch_year() == 2023));
}

#[test]
fn range_bounds_are_inclusive() {
    let catalog = catalog();
    let range = DateRange::parse("2023-01-15", "2024-03-20").unwrap();
    let results = ids(&filter(&catalog, &Criteria::new().launch_between(range)));
    assert!(results.contains(&1)); // launched 2023-01-15
    assert!(results.contains(&15)); // launched 2024-03-20
    assert_eq!(results.len(), 15);
}

#[test]
fn agency_and_year() {
    let catalog = catalog();
    let criteria = Criteria::new()
        .agency("vml")
        .launch_between(DateRange::parse("2024-01-01", "2024-12-31").unwrap());
    assert_eq!(ids(&filter(&catalog, &criteria)), vec![11, 20]);
}

#[test]
fn tone_and_strategy_type() {
    let catalog = catalog();
    let results = filter(&catalog, &Criteria::new().tone("INSPIRADOR"));
    assert_eq!(ids(&results), vec![3, 6, 13, 20]);

    let results = filter(&catalog, &Criteria::new().strategy_type("empoderamiento"));
    assert_eq!(ids(&results), vec![6, 17]);
}

#[test]
fn search_then_filter() {
    let catalog = catalog();
    let hits = search_fields("awards", &DEFAULT_SEARCH_FIELDS, &catalog);
    assert_eq!(ids(&hits), vec![3, 4, 13, 18]);

    let narrowed = filter(hits.iter().copied(), &Criteria::new().sector("Finanzas"));
    assert_eq!(ids(&narrowed), vec![4, 18]);
}

#[test]
fn raw_criteria_from_form_values() {
    let catalog = catalog();
    let criteria = Criteria::from_raw(
        [
            ("agencia", RawCriterion::Text("McCann".into())),
            ("medios", RawCriterion::List(vec!["Televisión".into()])),
            (
                "fecha_lanzamiento",
                RawCriterion::Pair("2023-01-01".into(), "not a date".into()),
            ),
        ],
        CriteriaPolicy::Lenient,
    )
    .unwrap();

    // The bad date bound drops only the date criterion.
    assert_eq!(criteria.len(), 2);
    assert!(criteria.get(Field::LaunchDate).is_none());
    assert_eq!(ids(&filter(&catalog, &criteria)), vec![1, 10, 19]);
}

#[test]
fn inverted_range_is_reported_before_filtering() {
    let err = Criteria::from_raw(
        [(
            "launch_date",
            RawCriterion::Pair("2024-06-01".into(), "2022-06-20".into()),
        )],
        CriteriaPolicy::Lenient,
    )
    .unwrap_err();
    assert!(matches!(err, SeekerError::InvertedDateRange { .. }));
}

#[test]
fn no_match_is_empty_not_error() {
    let catalog = catalog();
    let criteria = Criteria::new().sector("Bebidas").agency("McCann");
    let results = filter(&catalog, &criteria);
    assert!(results.is_empty());

    let summary = Summary::compute(results.iter().copied());
    assert!(summary.is_empty());
}

// ============================================================================
// Summary
// ============================================================================

#[test]
fn full_catalog_summary() {
    let catalog = catalog();
    let summary = Summary::compute(&catalog);

    assert_eq!(summary.total, 20);
    assert_eq!(summary.distinct_agencies, 9);
    assert_eq!(summary.distinct_sectors, 11);

    assert_eq!(summary.by_agency[0].label, "McCann");
    assert_eq!(summary.by_agency[0].count, 3);
    assert_eq!(summary.by_agency[1].label, "VML");
    assert_eq!(summary.by_agency[2].label, "Circus Grey");

    assert_eq!(summary.by_sector[0].label, "Finanzas");
    assert!((summary.by_sector[0].proportion - 0.2).abs() < 1e-9);

    let media: Vec<(&str, usize)> = summary
        .by_media
        .iter()
        .map(|b| (b.label.as_str(), b.count))
        .collect();
    assert_eq!(
        media,
        vec![
            ("Digital", 20),
            ("Televisión", 12),
            ("Publicidad Exterior", 6),
            ("Redes Sociales", 5),
            ("Experiencial", 4),
            ("Influencers", 3),
            ("Radio", 1),
        ]
    );
}

#[test]
fn full_catalog_strategy_trend() {
    let catalog = catalog();
    let trend = Summary::compute(&catalog).strategy_trend;

    assert_eq!(
        trend.strategies,
        vec![
            "Empoderamiento",
            "Engagement Social",
            "Identidad Nacional",
            "Inclusión Financiera",
            "Nostalgia y Orgullo",
        ]
    );
    assert_eq!(trend.years, vec![2022, 2023, 2024]);
    assert_eq!(
        trend.counts,
        vec![
            vec![0, 0, 0, 0, 1],
            vec![1, 0, 1, 1, 0],
            vec![1, 1, 0, 0, 0],
        ]
    );
}
