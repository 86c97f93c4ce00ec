use std::time::Duration;

use folio_site::autoplay::{auto_advance, DEFAULT_PERIOD};
use folio_site::content::all_tags;
use folio_site::{Carousel, ModalView, Project, ProjectCatalog, SiteConfig};

fn demo_project() -> Project {
    Project {
        title: "Demo".to_string(),
        pictures: vec!["a.png".into(), "b.png".into(), "c.png".into()],
        description: "desc".to_string(),
        competences: vec!["X".into(), "Y".into()],
        github_link: None,
    }
}

// ----------------------------------------------------------------------------
// Navigation
// ----------------------------------------------------------------------------

#[test]
fn test_next_len_times_is_identity() {
    for len in 1..=8 {
        let mut carousel = Carousel::new();
        carousel.open(len);
        for start in 0..len {
            assert_eq!(carousel.current(), Some(start));
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.current(), Some(start), "len {} start {}", len, start);
            carousel.next();
        }
    }
}

#[test]
fn test_previous_inverts_next() {
    for len in 1..=8 {
        let mut carousel = Carousel::new();
        carousel.open(len);
        for _ in 0..len {
            let start = carousel.current();
            carousel.next();
            carousel.previous();
            assert_eq!(carousel.current(), start);
            carousel.next();
        }
    }
}

#[test]
fn test_reopen_always_starts_at_zero() {
    let mut carousel = Carousel::new();
    for advances in 0..5 {
        carousel.open(5);
        for _ in 0..advances {
            carousel.next();
        }
        carousel.close();
        carousel.open(5);
        assert_eq!(carousel.current(), Some(0));
        carousel.close();
    }
}

// ----------------------------------------------------------------------------
// Timer
// ----------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_demo_project_cycles_in_three_periods() {
    let project = demo_project();
    let mut carousel = Carousel::new();
    let session = carousel.open(project.pictures.len());

    let view = ModalView::build(&project, &carousel);
    assert_eq!(view.title, "Demo");
    assert_eq!(view.active_indicator(), Some(0));
    assert!(view.link.is_none());

    let mut seen = Vec::new();
    let _ = tokio::time::timeout(
        DEFAULT_PERIOD * 3 + Duration::from_millis(1),
        auto_advance(DEFAULT_PERIOD, || {
            carousel.tick(session);
            seen.push(carousel.current());
        }),
    )
    .await;

    assert_eq!(seen, vec![Some(1), Some(2), Some(0)]);
    assert_eq!(ModalView::build(&project, &carousel).active_indicator(), Some(0));
}

#[tokio::test(start_paused = true)]
async fn test_close_stops_advancement() {
    let mut carousel = Carousel::new();
    let first = carousel.open(3);

    // One tick lands, then the modal closes mid-period.
    let _ = tokio::time::timeout(
        Duration::from_millis(3000),
        auto_advance(DEFAULT_PERIOD, || {
            carousel.tick(first);
        }),
    )
    .await;
    assert_eq!(carousel.current(), Some(1));
    carousel.close();

    tokio::time::sleep(DEFAULT_PERIOD * 5).await;

    // A tick from the old session that was already queued changes nothing.
    let second = carousel.open(2);
    assert!(!carousel.tick(first));
    assert_eq!(carousel.current(), Some(0));
    assert!(carousel.tick(second));
}

#[tokio::test(start_paused = true)]
async fn test_empty_project_never_ticks() {
    let mut carousel = Carousel::new();
    let session = carousel.open(0);
    assert!(!carousel.autoplays());

    let mut advanced = 0;
    let _ = tokio::time::timeout(
        DEFAULT_PERIOD * 4,
        auto_advance(DEFAULT_PERIOD, || {
            if carousel.tick(session) {
                advanced += 1;
            }
        }),
    )
    .await;
    assert_eq!(advanced, 0);
    assert_eq!(carousel.current(), None);
}

// ----------------------------------------------------------------------------
// Content and configuration
// ----------------------------------------------------------------------------

#[test]
fn test_builtin_catalog_renders() {
    let catalog = ProjectCatalog::builtin().unwrap();
    let mut carousel = Carousel::new();
    for project in catalog.iter() {
        carousel.open(project.pictures.len());
        let view = ModalView::build(project, &carousel);
        assert_eq!(view.title, project.title);
        assert!(view.picture.is_some());
        carousel.close();
    }
}

#[test]
fn test_catalog_file_round_trip_through_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("projects.toml"),
        r#"
            [[project]]
            title = "From disk"
            pictures = ["one.png", "two.png"]
            competences = ["Rust"]
        "#,
    )
    .unwrap();
    let config_path = dir.path().join("site.toml");
    std::fs::write(&config_path, "projects_file = \"projects.toml\"\n").unwrap();

    let config = SiteConfig::load(&config_path).unwrap();
    let catalog = ProjectCatalog::load(config.projects_file.as_deref().unwrap()).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(0).unwrap().title, "From disk");
}

#[test]
fn test_skill_tags_are_unique() {
    let mut tags: Vec<_> = all_tags().collect();
    let total = tags.len();
    tags.sort_unstable();
    tags.dedup();
    assert_eq!(tags.len(), total);
}
