pub mod pack;
pub mod svg;

pub use pack::{enclose, pack_circles, pack_siblings, Circle, PackedCircle};
pub use svg::{label_for, random_fill, render_svg, write_chart, CHART_TITLE};
