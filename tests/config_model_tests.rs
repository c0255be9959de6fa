//! Integration tests for configuration applied to the model.

mod common;

use common::{TestContents, TestDelegate, handle, titles};
use tab_strip::{
    AddTabFlags, InsertionPolicy, PageTransition, TabStripConfig, TabStripModel,
    TransitionPlacement,
};
use tempfile::TempDir;

fn model_from_config(config: &TabStripConfig) -> TabStripModel {
    let mut model = TabStripModel::with_config(TestDelegate::new(), config);
    for title in ["A", "B", "C"] {
        model.append_tab(handle(&TestContents::page(title)), false);
    }
    model
}

#[test]
fn test_yaml_config_drives_placement() -> anyhow::Result<()> {
    let yaml = "\
insertion_policy: insert_before_active
transition_placement:
  typed: adjacent
  link: append
";
    let config: TabStripConfig = serde_yaml_ng::from_str(yaml)?;
    let mut model = model_from_config(&config);
    model.select_tab_at(1, true);

    assert_eq!(model.insertion_policy(), InsertionPolicy::InsertBeforeActive);

    let typed = model.add_tab(
        handle(&TestContents::page("typed")),
        None,
        PageTransition::Typed,
        AddTabFlags::ACTIVE,
    );
    assert_eq!(typed, 1, "Typed opens adjacent, before the active tab");

    let link = model.add_tab(
        handle(&TestContents::page("link")),
        None,
        PageTransition::Link,
        AddTabFlags::ACTIVE,
    );
    assert_eq!(link, 4, "Link opens append");
    assert_eq!(titles(&model), vec!["A", "typed", "B", "C", "link"]);
    Ok(())
}

#[test]
fn test_saved_config_round_trips_into_model() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("config.yaml");

    let mut config = TabStripConfig::default();
    config
        .transition_placement
        .insert(PageTransition::AutoBookmark, TransitionPlacement::Adjacent);
    config.save_to(&path)?;

    let loaded = TabStripConfig::load_from(&path)?;
    let mut model = model_from_config(&loaded);

    let index = model.add_tab(
        handle(&TestContents::page("bookmark")),
        None,
        PageTransition::AutoBookmark,
        AddTabFlags::ACTIVE,
    );
    assert_eq!(index, 1, "Overridden transition opens after the active tab");
    Ok(())
}
