//! Drawing of a [`Scene`] as an SVG document.

use std::path::Path;

use num_traits::Float;
use svg::{
    Document,
    node::element::{Group, Line, Rectangle},
};

use crate::{Result, Viewport, cartesian::Segment, scene::Scene};

const GRID_COLOR: &str = "#eee";
const AXES_COLOR: &str = "#bbb";
const WINDOW_COLOR: &str = "#0078d7";
const SEGMENT_COLOR: &str = "black";
const CLIPPED_COLOR: &str = "red";

/// Returns the picture of the given scene as seen through the viewport.
///
/// Layers are stacked as follows: the grid, the world axes, the clip window, the original
/// segments and, on top, their visible portions.
pub fn render<T>(scene: &Scene<T>, viewport: &Viewport) -> Document
where
    T: Float,
{
    Document::new()
        .set("width", viewport.width())
        .set("height", viewport.height())
        .set("viewBox", (0., 0., viewport.width(), viewport.height()))
        .add(grid(viewport))
        .add(axes(viewport))
        .add(window(scene, viewport))
        .add(segments(
            "segments",
            scene.segments(),
            viewport,
            SEGMENT_COLOR,
            1.,
        ))
        .add(segments(
            "clipped",
            scene.clipped(),
            viewport,
            CLIPPED_COLOR,
            2.,
        ))
}

/// Renders the given scene and writes it into the file at path.
pub fn save<T>(path: impl AsRef<Path>, scene: &Scene<T>, viewport: &Viewport) -> Result
where
    T: Float,
{
    svg::save(path, &render(scene, viewport))?;
    Ok(())
}

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

fn grid(viewport: &Viewport) -> Group {
    let (width, height) = (viewport.width(), viewport.height());

    let vertical = viewport
        .vertical_grid()
        .map(|x| line(x, 0., x, height));
    let horizontal = viewport
        .horizontal_grid()
        .map(|y| line(0., y, width, y));

    vertical.chain(horizontal).fold(
        Group::new()
            .set("id", "grid")
            .set("stroke", GRID_COLOR)
            .set("stroke-width", 1),
        Group::add,
    )
}

fn axes(viewport: &Viewport) -> Group {
    let origin = viewport.axes();

    Group::new()
        .set("id", "axes")
        .set("stroke", AXES_COLOR)
        .set("stroke-width", 2)
        .add(line(origin.x, 0., origin.x, viewport.height()))
        .add(line(0., origin.y, viewport.width(), origin.y))
}

fn window<T>(scene: &Scene<T>, viewport: &Viewport) -> Rectangle
where
    T: Float,
{
    let min = viewport.to_screen(&scene.window().min());
    let max = viewport.to_screen(&scene.window().max());

    Rectangle::new()
        .set("id", "window")
        .set("x", min.x.min(max.x))
        .set("y", min.y.min(max.y))
        .set("width", (max.x - min.x).abs())
        .set("height", (max.y - min.y).abs())
        .set("fill", "none")
        .set("stroke", WINDOW_COLOR)
        .set("stroke-width", 2)
}

fn segments<'a, T>(
    id: &str,
    segments: impl IntoIterator<Item = &'a Segment<T>>,
    viewport: &Viewport,
    color: &str,
    width: f64,
) -> Group
where
    T: Float + 'a,
{
    segments
        .into_iter()
        .map(|segment| {
            let from = viewport.to_screen(&segment.from);
            let to = viewport.to_screen(&segment.to);
            line(from.x, from.y, to.x, to.y)
        })
        .fold(
            Group::new()
                .set("id", id)
                .set("stroke", color)
                .set("stroke-width", width)
                .set("stroke-linecap", "round"),
            Group::add,
        )
}
