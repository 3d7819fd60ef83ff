use wirepath_core::Point;

/// Orthogonal offsets in exploration order: +x, −x, +y, −y.
///
/// The order decides which of several equal-length routes is reported.
pub const CARDINALS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
];

/// Append the 4-directional neighbors of `p` to `buf`, in [`CARDINALS`]
/// order, keeping only those for which `keep` returns `true`.
pub fn cardinal(p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
    for d in CARDINALS {
        let n = p + d;
        if keep(n) {
            buf.push(n);
        }
    }
}
