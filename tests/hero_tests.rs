// Host-side tests for load-time hero sizing.

use page_effects::{min_height_value, HeroSizer, MinHeightTarget};
use std::cell::RefCell;

#[derive(Default)]
struct FakeHero {
    writes: RefCell<Vec<String>>,
}

impl MinHeightTarget for FakeHero {
    fn set_min_height(&self, value: &str) -> anyhow::Result<()> {
        self.writes.borrow_mut().push(value.to_string());
        Ok(())
    }
}

struct BrokenHero;

impl MinHeightTarget for BrokenHero {
    fn set_min_height(&self, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("style is read-only")
    }
}

#[test]
fn formats_like_js_numbers() {
    assert_eq!(min_height_value(800.0), "800px");
    assert_eq!(min_height_value(0.0), "0px");
    assert_eq!(min_height_value(812.5), "812.5px");
}

#[test]
fn applies_viewport_height_once() {
    let hero = FakeHero::default();
    let sizer = HeroSizer::new(&hero);
    assert!(!sizer.is_applied());
    assert!(sizer.apply(800.0).unwrap());
    assert!(sizer.is_applied());
    assert_eq!(*hero.writes.borrow(), vec!["800px".to_string()]);
}

#[test]
fn later_resize_does_not_update() {
    let hero = FakeHero::default();
    let sizer = HeroSizer::new(&hero);
    sizer.apply(800.0).unwrap();
    assert!(!sizer.apply(640.0).unwrap());
    assert!(!sizer.apply(1024.0).unwrap());
    assert_eq!(*hero.writes.borrow(), vec!["800px".to_string()]);
}

#[test]
fn failed_write_is_reported_and_not_marked_applied() {
    let sizer = HeroSizer::new(BrokenHero);
    let err = sizer.apply(800.0).unwrap_err();
    assert!(err.to_string().contains("read-only"));
    assert!(!sizer.is_applied());
}

#[test]
fn common_viewport_heights_format_without_fraction() {
    for (h, want) in [(667.0, "667px"), (844.0, "844px"), (1080.0, "1080px"), (731.5, "731.5px")] {
        assert_eq!(min_height_value(h), want);
    }
}
