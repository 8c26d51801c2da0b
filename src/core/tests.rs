#[cfg(test)]
mod tests {
    use crate::core::scroll_spy::{most_visible_section, update_indicator};
    use crate::core::{
        Breakpoints, CarouselState, Debouncer, IndicatorUpdate, NavLinkView, Rect,
        ScrollAnimation, SectionView, ease_in_out_quad, visible_count,
    };

    fn sections_at(scroll_y: f64) -> Vec<SectionView> {
        [("hero", 0.0, 600.0), ("about", 600.0, 1400.0), ("itinerary", 1400.0, 2200.0)]
            .into_iter()
            .map(|(id, top, bottom)| SectionView {
                id: id.to_string(),
                rect: Rect::new(0.0, top - scroll_y, 1280.0, bottom - top),
            })
            .collect()
    }

    #[test]
    fn test_narrow_viewport_wraps_six_item_gallery() {
        let visible = visible_count(500.0, &Breakpoints::default());
        assert_eq!(visible, 2);

        let mut carousel = CarouselState::new(6);
        while carousel.position() < 4 {
            carousel.next(visible);
        }
        assert_eq!(carousel.next(visible), 0);
    }

    #[test]
    fn test_progress_rises_until_wrap() {
        let mut carousel = CarouselState::new(7);
        let visible = 3;
        let baseline = carousel.render(visible, 240.0).unwrap().progress;

        let mut last = baseline;
        for _ in 0..carousel.max_position(visible) {
            carousel.next(visible);
            let progress = carousel.render(visible, 240.0).unwrap().progress;
            assert!(progress >= last);
            last = progress;
        }
        assert_eq!(last, 100.0);

        carousel.next(visible);
        assert_eq!(carousel.render(visible, 240.0).unwrap().progress, baseline);
    }

    #[test]
    fn test_scrolling_moves_active_section() {
        assert_eq!(most_visible_section(&sections_at(0.0), 800.0), Some("hero"));
        assert_eq!(most_visible_section(&sections_at(500.0), 800.0), Some("about"));
        assert_eq!(most_visible_section(&sections_at(1500.0), 800.0), Some("itinerary"));
    }

    #[test]
    fn test_repeated_indicator_update_is_stable() {
        let container = Rect::new(300.0, 0.0, 600.0, 60.0);
        let links: Vec<NavLinkView> = ["#hero", "#about", "#itinerary"]
            .iter()
            .enumerate()
            .map(|(i, href)| NavLinkView {
                href: href.to_string(),
                rect: Rect::new(320.0 + i as f64 * 100.0, 20.0, 70.0, 20.0),
                container,
            })
            .collect();

        let sections = sections_at(1500.0);
        let first = update_indicator(1280.0, 800.0, 768.0, &sections, &links);
        let second = update_indicator(1280.0, 800.0, 768.0, &sections, &links);
        assert_eq!(first, second);
        assert!(matches!(first, IndicatorUpdate::Shown { active: Some(2), .. }));
    }

    #[test]
    fn test_debounced_scroll_burst() {
        let mut debouncer = Debouncer::immediate(10.0);
        let fired: Vec<bool> = [0.0, 2.0, 5.0, 9.0, 30.0, 31.0]
            .iter()
            .map(|&now| debouncer.trigger(now))
            .collect();
        assert_eq!(fired, vec![true, false, false, false, true, false]);
    }

    #[test]
    fn test_smooth_scroll_lands_on_eased_target() {
        let mut animation = ScrollAnimation::new(0.0, 1328.0, 1200.0);
        let mut now = 0.0;
        let mut step = animation.step(now);
        while step.keep_going {
            now += 16.7;
            step = animation.step(now);
            assert!(step.position <= 1328.0);
        }
        assert_eq!(step.position, ease_in_out_quad(1200.0, 0.0, 1328.0, 1200.0));
        assert_eq!(step.position, 1328.0);
    }
}
