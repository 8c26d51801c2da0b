//! Nav underline that follows the section currently in view

use web_sys::Element;

use super::debounce::debounced;
use super::dom;
use crate::core::scroll_spy::update_indicator;
use crate::core::{Breakpoints, Debouncer, IndicatorUpdate, NavLinkView, PageConfig, PageResult, SectionView};

pub const INDICATOR_SELECTOR: &str = "#nav-indicator";
pub const SECTION_SELECTOR: &str = "section";
pub const LINK_SELECTOR: &str = "#main-nav ul li a";

fn section_views() -> PageResult<Vec<SectionView>> {
    Ok(dom::query_all(SECTION_SELECTOR)?
        .iter()
        .map(|section| SectionView {
            id: section.id(),
            rect: dom::rect_of(section),
        })
        .collect())
}

fn link_views(links: &[Element]) -> Vec<NavLinkView> {
    links
        .iter()
        .map(|link| {
            // the list holding the links: a -> li -> ul
            let container = link
                .parent_element()
                .and_then(|item| item.parent_element())
                .map(|list| dom::rect_of(&list))
                .unwrap_or_default();

            NavLinkView {
                href: link.get_attribute("href").unwrap_or_default(),
                rect: dom::rect_of(link),
                container,
            }
        })
        .collect()
}

/// Recompute the active section and move the indicator.
fn refresh(indicator: &Element, breakpoints: &Breakpoints) -> PageResult<()> {
    let window = dom::window()?;
    let (width, height) = dom::viewport(&window)?;

    if breakpoints.is_mobile(width) {
        return dom::set_style(indicator, "display", "none");
    }
    dom::set_style(indicator, "display", "block")?;

    let sections = section_views()?;
    let links = dom::query_all(LINK_SELECTOR)?;
    let views = link_views(&links);

    let IndicatorUpdate::Shown { active, geometry } =
        update_indicator(width, height, breakpoints.medium, &sections, &views)
    else {
        return Ok(());
    };

    for (index, link) in links.iter().enumerate() {
        let class_list = link.class_list();
        if Some(index) == active {
            class_list.add_1("active")?;
        } else {
            class_list.remove_1("active")?;
        }
    }

    if let Some(geometry) = geometry {
        dom::set_style(indicator, "width", &format!("{}px", geometry.width))?;
        dom::set_style(indicator, "left", &format!("{}px", geometry.left))?;
    }
    Ok(())
}

/// Track scroll and resize, debounced, and place the indicator once now.
pub fn init(config: &PageConfig) -> PageResult<()> {
    let indicator = dom::query(INDICATOR_SELECTOR)?;
    let window = dom::window()?;
    let breakpoints = config.breakpoints;

    let update = move || {
        if let Err(err) = refresh(&indicator, &breakpoints) {
            leptos::logging::warn!("Nav indicator: {}", err);
        }
    };

    for event in ["scroll", "resize"] {
        let mut handler = debounced(Debouncer::immediate(config.debounce_ms as f64), update.clone());
        dom::listen(&window, event, move |_| handler())?;
    }

    update();
    Ok(())
}
