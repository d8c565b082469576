mod showcase;

use ranger_components::ColorScheme;
use ranger_ui::{GestureEvent, GestureQueue, PointerId, logging};
use tracing::{error, info};

use crate::showcase::{Showcase, scripted_drag};

fn main() {
    logging::init_tracing();

    let mut showcase = match Showcase::new(ColorScheme::Light) {
        Ok(showcase) => showcase,
        Err(err) => {
            error!(%err, "failed to build showcase");
            return;
        }
    };
    let scale_factor = 1.0;
    showcase.render(scale_factor);

    let mut queue = GestureQueue::default();

    info!("dragging the lower year handle right");
    scripted_drag(&mut queue, PointerId::MOUSE, 40.0, 95.0, 6);
    showcase.years.run(&mut queue);

    info!("dragging the upper percent handle onto the lower one");
    scripted_drag(&mut queue, PointerId::MOUSE, 24.0, 4.0, 4);
    showcase.percent.run(&mut queue);

    info!("nudging the weight range with touch");
    let finger = PointerId::touch(0);
    scripted_drag(&mut queue, finger, 124.0, 150.0, 3);
    scripted_drag(&mut queue, finger, 280.0, 330.0, 3);
    showcase.weight.run(&mut queue);

    info!("cancelling a month drag halfway");
    queue.push(GestureEvent::began(PointerId::MOUSE, 20.0));
    queue.push(GestureEvent::changed(PointerId::MOUSE, 60.0));
    queue.push(GestureEvent::cancelled(PointerId::MOUSE, 100.0));
    showcase.months.run(&mut queue);

    showcase.render(scale_factor);
}
