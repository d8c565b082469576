use std::ops::RangeInclusive;

use ranger_components::{
    ColorScheme, RangeSlider, RangeSliderArgs, RangeSliderError, RangeSliderStyle, SliderValue,
};
use ranger_ui::{Binding, GestureEvent, GestureQueue, PointerId, Px};
use tracing::info;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// One labelled slider together with the range the host keeps for it.
pub struct Entry<T: SliderValue> {
    pub name: &'static str,
    pub slider: RangeSlider<T>,
    pub range: Binding<RangeInclusive<T>>,
    pub track_width: Px,
}

impl<T: SliderValue> Entry<T> {
    fn new(
        name: &'static str,
        args: RangeSliderArgs<T>,
        initial: RangeInclusive<T>,
        track_width: Px,
    ) -> Result<Self, RangeSliderError> {
        let args = args.on_value_changed(move |bound, range| {
            info!(slider = name, ?bound, ?range, "value changed");
        });
        Ok(Self {
            name,
            slider: RangeSlider::new(args)?,
            range: Binding::new(initial),
            track_width,
        })
    }

    /// Feeds every queued event through the slider.
    pub fn run(&mut self, queue: &mut GestureQueue) {
        if queue.is_empty() {
            return;
        }
        for event in queue.take_events() {
            self.slider.drive(&self.range, event, self.track_width);
        }
    }

    pub fn render(&self, scale_factor: f64) {
        let frame = self
            .slider
            .frame(&self.range.get(), self.track_width, scale_factor);
        info!(
            slider = self.name,
            text = %frame.value_text(),
            lower = frame.lower_offset().raw(),
            upper = frame.upper_offset().raw(),
            highlight = frame.highlight.width.raw(),
            highlight_rgba = ?frame.highlight_color.to_array(),
            "frame"
        );
    }
}

pub struct Showcase {
    pub years: Entry<i32>,
    pub percent: Entry<f64>,
    pub weight: Entry<f32>,
    pub months: Entry<u8>,
}

impl Showcase {
    pub fn new(scheme: ColorScheme) -> Result<Self, RangeSliderError> {
        let style = RangeSliderStyle::for_scheme(scheme);
        Ok(Self {
            years: Entry::new(
                "years",
                RangeSliderArgs::default()
                    .limits(1965..=2040)
                    .step(5)
                    .label("Years")
                    .style(style),
                1975..=2015,
                Px(300),
            )?,
            percent: Entry::new(
                "percent",
                RangeSliderArgs::default()
                    .limits(0.0..=100.0)
                    .step(2.0)
                    .label("Percent")
                    .style(style),
                4.0..=12.0,
                Px(200),
            )?,
            weight: Entry::new(
                "weight",
                RangeSliderArgs::default()
                    .limits(10.0..=105.0)
                    .step(2.5)
                    .precision(2)
                    .label("Weight")
                    .style(style),
                41.0..=80.0,
                Px(380),
            )?,
            months: Entry::new(
                "months",
                RangeSliderArgs::default()
                    .limits(1..=12)
                    .step(1)
                    .describe_value(month_name)
                    .label("Months")
                    .style(style),
                2..=8,
                Px(220),
            )?,
        })
    }

    pub fn render(&self, scale_factor: f64) {
        self.years.render(scale_factor);
        self.percent.render(scale_factor);
        self.weight.render(scale_factor);
        self.months.render(scale_factor);
    }
}

fn month_name(month: u8) -> Option<String> {
    MONTHS
        .get(usize::from(month).checked_sub(1)?)
        .map(|name| (*name).to_string())
}

/// Press at `from`, move in `steps` increments to `to`, release.
pub fn scripted_drag(queue: &mut GestureQueue, pointer: PointerId, from: f64, to: f64, steps: u32) {
    queue.push(GestureEvent::began(pointer, from));
    let steps = steps.max(1);
    for i in 1..=steps {
        let t = f64::from(i) / f64::from(steps);
        queue.push(GestureEvent::changed(pointer, from + (to - from) * t));
    }
    queue.push(GestureEvent::ended(pointer, to));
}
