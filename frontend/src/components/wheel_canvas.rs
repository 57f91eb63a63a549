use std::f64::consts::PI;

use shared::wheel::Segment;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const LABEL_MAX_CHARS: usize = 12;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let segments = props.segments.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;

        use_effect_with(
            (segments, rotation, is_spinning),
            move |(segments, rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(&context, &canvas, segments, *rotation, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="360"
                height="360"
                class="w-full max-w-[360px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(245, 158, 11, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.4));"
                }}
            />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    segments: &[Segment],
    rotation: f64,
    is_spinning: bool,
) {
    let size = canvas.width() as f64;
    let center = size / 2.0;
    let radius = center - 10.0;

    context.clear_rect(0.0, 0.0, size, size);

    // The slice layer rotates; everything after restore() stays fixed.
    context.save();
    let _ = context.translate(center, center);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center, -center);

    let count = segments.len().max(1);
    let arc = 2.0 * PI / count as f64;

    for (index, segment) in segments.iter().enumerate() {
        // Offset by -PI/2 so slice 0 opens at the pointer when unrotated.
        let start = index as f64 * arc - PI / 2.0;
        let end = start + arc;

        context.begin_path();
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, end);
        context.close_path();
        context.set_fill_style_str(&segment.color);
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.2)");
        context.set_line_width(2.0);
        context.stroke();

        // Label along the slice bisector, anchored near the rim.
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(start + arc / 2.0);
        context.set_text_align("right");
        context.set_fill_style_str("#ffffff");
        context.set_font("bold 13px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_shadow_color("rgba(0, 0, 0, 0.5)");
        context.set_shadow_blur(4.0);
        let _ = context.fill_text(&truncate_label(&segment.name), radius - 12.0, 4.0);
        context.restore();
    }

    context.restore();

    // Center hub
    context.begin_path();
    let _ = context.arc(center, center, 25.0, 0.0, 2.0 * PI);
    context.set_fill_style_str("hsl(45, 93%, 52%)");
    context.fill();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
    context.set_line_width(2.0);
    context.stroke();

    // Rim shading for depth
    context.begin_path();
    let _ = context.arc(center, center, radius, 0.0, 2.0 * PI);
    context.set_stroke_style_str("rgba(0, 0, 0, 0.3)");
    context.set_line_width(4.0);
    context.stroke();

    // Fixed pointer at the top
    context.set_shadow_color(if is_spinning {
        "rgba(245, 158, 11, 0.8)"
    } else {
        "rgba(0, 0, 0, 0.4)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(center - 16.0, 2.0);
    context.line_to(center + 16.0, 2.0);
    context.line_to(center, 32.0);
    context.close_path();
    context.set_fill_style_str("hsl(45, 93%, 47%)");
    context.fill();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

fn truncate_label(name: &str) -> String {
    if name.chars().count() > LABEL_MAX_CHARS {
        let cut: String = name.chars().take(LABEL_MAX_CHARS - 2).collect();
        format!("{cut}..")
    } else {
        name.to_string()
    }
}

/// Easing applied to the spin animation, a quartic ease-out for a long
/// deceleration tail.
pub fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}
