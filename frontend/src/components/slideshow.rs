use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::Feature;

const AUTOPLAY_MS: u32 = 3000;

pub fn slides_per_view(viewport_width: f64) -> usize {
    if viewport_width >= 1024.0 {
        3
    } else if viewport_width >= 640.0 {
        2
    } else {
        1
    }
}

/// Position of a slideshow showing `per_view` of `len` slides at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    per_view: usize,
    index: usize,
}

pub enum CarouselAction {
    Advance,
    GoTo(usize),
    Resize(usize),
}

impl Carousel {
    pub fn new(len: usize, per_view: usize) -> Self {
        Self {
            len,
            per_view: per_view.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    /// Distinct stops, one pagination dot each.
    pub fn positions(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            self.len.saturating_sub(self.per_view) + 1
        }
    }

    /// Track offset in percent of the viewport width.
    pub fn offset_percent(&self) -> f64 {
        self.index as f64 * 100.0 / self.per_view as f64
    }

    fn apply(&mut self, action: CarouselAction) {
        let positions = self.positions().max(1);
        match action {
            // wraps back to the first stop after the last
            CarouselAction::Advance => self.index = (self.index + 1) % positions,
            CarouselAction::GoTo(index) => {
                if index < positions {
                    self.index = index;
                }
            }
            CarouselAction::Resize(per_view) => {
                self.per_view = per_view.max(1);
                self.index = self.index.min(self.positions().saturating_sub(1));
            }
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

#[derive(Properties, PartialEq)]
pub struct SlideshowProps {
    pub features: &'static [Feature],
}

#[function_component(Slideshow)]
pub fn slideshow(props: &SlideshowProps) -> Html {
    let carousel = {
        let len = props.features.len();
        use_reducer(move || Carousel::new(len, slides_per_view(viewport_width())))
    };

    {
        let dispatcher = carousel.dispatcher();
        use_interval(move || dispatcher.dispatch(CarouselAction::Advance), AUTOPLAY_MS);
    }

    // Recompute slides per view when the window is resized
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let callback = Closure::<dyn Fn()>::new(move || {
                    dispatcher.dispatch(CarouselAction::Resize(slides_per_view(viewport_width())));
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
                }
                move || {
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let slide_width = format!("width: {}%;", 100.0 / carousel.per_view() as f64);
    let track_style = format!(
        "transform: translateX(-{}%); transition: transform 300ms ease;",
        carousel.offset_percent()
    );

    html! {
        <div class="overflow-hidden pb-12 relative">
            <div class="flex" style={track_style}>
                { for props.features.iter().map(|feature| html! {
                    <div class="shrink-0 px-4" style={slide_width.clone()}>
                        <div class="bg-card-dark p-8 rounded-lg shadow-custom-dark h-full hover:-translate-y-2 transition-transform duration-300">
                            <div class="text-primary mb-4">
                                <span class="material-symbols-outlined text-4xl">{feature.icon}</span>
                            </div>
                            <h3 class="text-xl font-bold text-text-light mb-4">{feature.title}</h3>
                            <p class="text-text-light">{feature.desc}</p>
                        </div>
                    </div>
                }) }
            </div>
            <div class="absolute bottom-0 left-0 right-0 flex justify-center gap-2">
                { for (0..carousel.positions()).map(|index| {
                    let dispatcher = carousel.dispatcher();
                    let onclick = Callback::from(move |_: MouseEvent| dispatcher.dispatch(CarouselAction::GoTo(index)));
                    html! {
                        <button
                            class={classes!("w-3", "h-3", "rounded-full", "cursor-pointer",
                                if index == carousel.index() { "bg-primary" } else { "bg-gray-500" })}
                            aria-label={format!("Go to slide {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(carousel: &mut Carousel, action: CarouselAction) {
        carousel.apply(action);
    }

    #[test]
    fn breakpoints() {
        assert_eq!(slides_per_view(375.0), 1);
        assert_eq!(slides_per_view(640.0), 2);
        assert_eq!(slides_per_view(1023.0), 2);
        assert_eq!(slides_per_view(1440.0), 3);
    }

    #[test]
    fn autoplay_rewinds_after_last_stop() {
        let mut carousel = Carousel::new(4, 3);
        assert_eq!(carousel.positions(), 2);
        step(&mut carousel, CarouselAction::Advance);
        assert_eq!(carousel.index(), 1);
        step(&mut carousel, CarouselAction::Advance);
        assert_eq!(carousel.index(), 0);

        let mut single = Carousel::new(4, 1);
        let seen: Vec<usize> = (0..5)
            .map(|_| {
                step(&mut single, CarouselAction::Advance);
                single.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[test]
    fn pagination_ignores_out_of_range() {
        let mut carousel = Carousel::new(4, 2);
        step(&mut carousel, CarouselAction::GoTo(2));
        assert_eq!(carousel.index(), 2);
        assert_eq!(carousel.offset_percent(), 100.0);
        step(&mut carousel, CarouselAction::GoTo(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn widening_clamps_the_index() {
        let mut carousel = Carousel::new(4, 1);
        step(&mut carousel, CarouselAction::GoTo(3));
        step(&mut carousel, CarouselAction::Resize(3));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.positions(), 2);
    }

    #[test]
    fn more_per_view_than_slides() {
        let mut carousel = Carousel::new(2, 3);
        assert_eq!(carousel.positions(), 1);
        step(&mut carousel, CarouselAction::Advance);
        assert_eq!(carousel.index(), 0);

        let empty = Carousel::new(0, 1);
        assert_eq!(empty.positions(), 0);
    }
}
