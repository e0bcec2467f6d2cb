use anyhow::Result;
use content_pipeline::core::{Catalog, ContentItem, Section};
use content_pipeline::{
    run_pipeline, BrowseState, Filters, LogPageObserver, PipelineQuery, SectionView, SortKey,
};

fn ids<T: ContentItem>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.id().to_string()).collect()
}

fn query(sort: SortKey) -> PipelineQuery {
    PipelineQuery {
        sort,
        page_size: 50,
        ..PipelineQuery::default()
    }
}

#[test]
fn test_blog_newest_second_page() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let q = PipelineQuery {
        sort: SortKey::Newest,
        page: 2,
        page_size: 3,
        ..PipelineQuery::default()
    };

    let result = run_pipeline(&catalog.blog_posts, &q);
    assert_eq!(result.total_count, 9);
    assert_eq!(result.total_pages, 3);
    assert_eq!(
        ids(&result.visible_items),
        vec![
            "ransomware-first-24-hours",
            "threat-intel-on-a-budget",
            "securing-ci-pipelines"
        ]
    );

    // the undated post sorts last
    let last = run_pipeline(&catalog.blog_posts, &PipelineQuery { page: 3, ..q });
    assert_eq!(
        last.visible_items.last().map(|p| p.id.as_str()),
        Some("security-roadmap-template")
    );
    Ok(())
}

#[test]
fn test_case_study_search_cloud() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let q = PipelineQuery {
        query: "cloud".to_string(),
        ..query(SortKey::FeaturedFirst)
    };

    let result = run_pipeline(&catalog.case_studies, &q);
    println!("🔍 cloud matches: {:?}", ids(&result.visible_items));
    assert_eq!(
        ids(&result.visible_items),
        vec!["fintech-cloud-hardening", "retail-zero-trust"]
    );
    Ok(())
}

#[test]
fn test_blog_search_is_case_insensitive_and_ignores_category() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let q = PipelineQuery {
        query: "CLOUD".to_string(),
        ..query(SortKey::Identity)
    };

    let result = run_pipeline(&catalog.blog_posts, &q);
    assert_eq!(
        ids(&result.visible_items),
        vec!["s3-bucket-misconfigurations", "kubernetes-rbac-pitfalls"]
    );
    Ok(())
}

#[test]
fn test_testimonials_rating_and_industry() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let q = PipelineQuery {
        filters: Filters::new().with("rating", "5").with("industry", "finance"),
        ..query(SortKey::Newest)
    };

    let result = run_pipeline(&catalog.testimonials, &q);
    assert_eq!(ids(&result.visible_items), vec!["t-quantfund", "t-ledgerline"]);
    Ok(())
}

#[test]
fn test_service_alias_ors_with_domain() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let canonical = PipelineQuery {
        filters: Filters::new()
            .with("domain", "cloud-security")
            .with("domain", "incident-response"),
        ..query(SortKey::Identity)
    };
    let aliased = PipelineQuery {
        filters: Filters::new()
            .with("domain", "cloud-security")
            .with("service", "incident-response"),
        ..query(SortKey::Identity)
    };

    let expected = ids(&run_pipeline(&catalog.testimonials, &canonical).visible_items);
    assert!(!expected.is_empty());
    assert_eq!(
        ids(&run_pipeline(&catalog.testimonials, &aliased).visible_items),
        expected
    );
    Ok(())
}

#[test]
fn test_case_studies_size_and_impact_orders() -> Result<()> {
    let catalog = Catalog::builtin()?;

    let by_size = run_pipeline(&catalog.case_studies, &query(SortKey::SizeDesc));
    assert_eq!(
        ids(&by_size.visible_items),
        vec![
            "hospital-incident-response",
            "retail-zero-trust",
            "fintech-cloud-hardening",
            "council-security-audit",
            "saas-pentest",
            "energy-threat-intel"
        ]
    );

    let by_impact = run_pipeline(&catalog.case_studies, &query(SortKey::Impact));
    assert_eq!(
        ids(&by_impact.visible_items),
        vec![
            "fintech-cloud-hardening",
            "hospital-incident-response",
            "retail-zero-trust",
            "saas-pentest",
            "council-security-audit",
            "energy-threat-intel"
        ]
    );
    Ok(())
}

#[test]
fn test_featured_and_year_filters_on_blog() -> Result<()> {
    let catalog = Catalog::builtin()?;

    let featured = PipelineQuery {
        filters: Filters::new().with("category", "featured"),
        ..query(SortKey::Newest)
    };
    assert_eq!(
        ids(&run_pipeline(&catalog.blog_posts, &featured).visible_items),
        vec!["zero-trust-in-practice", "ransomware-first-24-hours"]
    );

    let year = PipelineQuery {
        filters: Filters::new().with("date-range", "2023"),
        ..query(SortKey::Oldest)
    };
    let result = run_pipeline(&catalog.blog_posts, &year);
    assert_eq!(result.total_count, 5);
    assert_eq!(result.visible_items[0].id, "tabletop-exercises");
    Ok(())
}

#[test]
fn test_malformed_input_never_errors() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let q = PipelineQuery {
        filters: Filters::new().with("not-a-group", "x"),
        sort: SortKey::parse("most-popular"),
        page: 999,
        page_size: 0,
        query: String::new(),
    };

    let result = run_pipeline(&catalog.testimonials, &q);
    assert_eq!(result.total_count, catalog.testimonials.len());
    assert_eq!(result.page, result.total_pages);
    assert_eq!(result.visible_items.len(), 1);
    assert_eq!(
        result.visible_items[0].id,
        catalog.testimonials.last().map(|t| t.id.clone()).unwrap_or_default()
    );
    Ok(())
}

#[test]
fn test_section_view_with_log_observer() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut view = SectionView::new(
        Section::Testimonials,
        &catalog.testimonials,
        BrowseState::new(4, SortKey::RatingDesc),
    )
    .with_observer(LogPageObserver);

    let first = view.render();
    assert_eq!(first.total_pages, 3);
    assert!(first.visible_items.iter().all(|t| t.rating.value() == 5));

    view.state_mut().set_page(3);
    let last = view.render();
    assert_eq!(last.page, 3);
    assert_eq!(last.visible_items.len(), 1);
    Ok(())
}
