//! Circle packing: sibling circles laid out along a front chain, then fitted
//! into the unit circle through their smallest enclosing circle.

/// A circle in chart space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }
}

/// A packed circle together with the value that sized it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedCircle {
    pub circle: Circle,
    pub datum: f64,
}

/// Put `c` tangent to both `a` and `b`.
fn place(b: Circle, a: Circle, c: &mut Circle) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;

    if d2 > 0.0 {
        let a2 = (a.r + c.r).powi(2);
        let b2 = (b.r + c.r).powi(2);
        if a2 > b2 {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            let y = (b2 / d2 - x * x).max(0.0).sqrt();
            c.x = b.x - x * dx - y * dy;
            c.y = b.y - x * dy + y * dx;
        } else {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            let y = (a2 / d2 - x * x).max(0.0).sqrt();
            c.x = a.x + x * dx - y * dy;
            c.y = a.y + x * dy + y * dx;
        }
    } else {
        c.x = a.x + c.r;
        c.y = a.y;
    }
}

fn intersects(a: &Circle, b: &Circle) -> bool {
    let dr = a.r + b.r - 1e-6;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

/// Squared distance from the origin to the weighted midpoint of `a` and `b`.
fn score(a: &Circle, b: &Circle) -> f64 {
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

/// Pack circles (radii set, positions ignored) so that none overlap.
///
/// Returns the enclosing circle; circles are translated so it sits at the
/// origin.
pub fn pack_siblings(circles: &mut [Circle]) -> Circle {
    let n = circles.len();
    if n == 0 {
        return Circle::default();
    }

    circles[0].x = 0.0;
    circles[0].y = 0.0;
    if n == 1 {
        return Circle::new(0.0, 0.0, circles[0].r);
    }

    let (r0, r1) = (circles[0].r, circles[1].r);
    circles[0].x = -r1;
    circles[1].x = r0;
    circles[1].y = 0.0;
    if n == 2 {
        return Circle::new(0.0, 0.0, r0 + r1);
    }

    let (first, second) = (circles[0], circles[1]);
    place(second, first, &mut circles[2]);

    // Front chain as a circular doubly linked list over circle indices.
    let mut next = vec![0usize; n];
    let mut prev = vec![0usize; n];
    next[0] = 1;
    prev[2] = 1;
    next[1] = 2;
    prev[0] = 2;
    next[2] = 0;
    prev[1] = 0;

    let (mut a, mut b) = (0usize, 1usize);
    let mut i = 3;
    'pack: while i < n {
        let (ca, cb) = (circles[a], circles[b]);
        place(ca, cb, &mut circles[i]);

        // Closest intersecting circle on the chain, by distance along it.
        let (mut j, mut k) = (next[b], prev[a]);
        let (mut sj, mut sk) = (circles[b].r, circles[a].r);
        loop {
            if sj <= sk {
                if intersects(&circles[j], &circles[i]) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sj += circles[j].r;
                j = next[j];
            } else {
                if intersects(&circles[k], &circles[i]) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sk += circles[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        prev[i] = a;
        next[i] = b;
        next[a] = i;
        prev[b] = i;
        b = i;

        let mut best = score(&circles[a], &circles[next[a]]);
        let mut c = next[i];
        while c != b {
            let s = score(&circles[c], &circles[next[c]]);
            if s < best {
                a = c;
                best = s;
            }
            c = next[c];
        }
        b = next[a];
        i += 1;
    }

    let mut chain = vec![circles[b]];
    let mut c = next[b];
    while c != b {
        chain.push(circles[c]);
        c = next[c];
    }
    let enc = enclose(&chain);

    for circle in circles.iter_mut() {
        circle.x -= enc.x;
        circle.y -= enc.y;
    }
    Circle::new(0.0, 0.0, enc.r)
}

fn encloses_not(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr < 0.0 || dr * dr < dx * dx + dy * dy
}

fn encloses_weak(a: &Circle, b: &Circle) -> bool {
    let dr = a.r - b.r + a.r.max(b.r).max(1.0) * 1e-9;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

fn encloses_weak_all(a: &Circle, basis: &[Circle]) -> bool {
    basis.iter().all(|b| encloses_weak(a, b))
}

fn enclose_basis2(a: &Circle, b: &Circle) -> Circle {
    let x21 = b.x - a.x;
    let y21 = b.y - a.y;
    let r21 = b.r - a.r;
    let l = (x21 * x21 + y21 * y21).sqrt();
    Circle::new(
        (a.x + b.x + x21 / l * r21) / 2.0,
        (a.y + b.y + y21 / l * r21) / 2.0,
        (l + a.r + b.r) / 2.0,
    )
}

fn enclose_basis3(a: &Circle, b: &Circle, c: &Circle) -> Circle {
    let (x1, y1, r1) = (a.x, a.y, a.r);
    let (x2, y2, r2) = (b.x, b.y, b.r);
    let (x3, y3, r3) = (c.x, c.y, c.r);

    let a2 = x1 - x2;
    let a3 = x1 - x3;
    let b2 = y1 - y2;
    let b3 = y1 - y3;
    let c2 = r2 - r1;
    let c3 = r3 - r1;
    let d1 = x1 * x1 + y1 * y1 - r1 * r1;
    let d2 = d1 - x2 * x2 - y2 * y2 + r2 * r2;
    let d3 = d1 - x3 * x3 - y3 * y3 + r3 * r3;
    let ab = a3 * b2 - a2 * b3;
    let xa = (b2 * d3 - b3 * d2) / (ab * 2.0) - x1;
    let xb = (b3 * c2 - b2 * c3) / ab;
    let ya = (a3 * d2 - a2 * d3) / (ab * 2.0) - y1;
    let yb = (a2 * c3 - a3 * c2) / ab;
    let qa = xb * xb + yb * yb - 1.0;
    let qb = 2.0 * (r1 + xa * xb + ya * yb);
    let qc = xa * xa + ya * ya - r1 * r1;
    let r = -(if qa.abs() > 1e-6 {
        (qb + (qb * qb - 4.0 * qa * qc).sqrt()) / (2.0 * qa)
    } else {
        qc / qb
    });

    Circle::new(x1 + xa + xb * r, y1 + ya + yb * r, r)
}

fn enclose_basis(basis: &[Circle]) -> Circle {
    match basis {
        [a] => *a,
        [a, b] => enclose_basis2(a, b),
        [a, b, c] => enclose_basis3(a, b, c),
        _ => Circle::default(),
    }
}

/// Smallest basis (at most three circles) containing both `basis` and `p`.
fn extend_basis(basis: &[Circle], p: Circle) -> Option<Vec<Circle>> {
    if encloses_weak_all(&p, basis) {
        return Some(vec![p]);
    }

    for bi in basis {
        if encloses_not(&p, bi) && encloses_weak_all(&enclose_basis2(bi, &p), basis) {
            return Some(vec![*bi, p]);
        }
    }

    for (i, bi) in basis.iter().enumerate() {
        for bj in &basis[i + 1..] {
            if encloses_not(&enclose_basis2(bi, bj), &p)
                && encloses_not(&enclose_basis2(bi, &p), bj)
                && encloses_not(&enclose_basis2(bj, &p), bi)
                && encloses_weak_all(&enclose_basis3(bi, bj, &p), basis)
            {
                return Some(vec![*bi, *bj, p]);
            }
        }
    }

    None
}

/// Loose enclosure around the centroid, used when the exact basis search
/// runs into numerical trouble.
fn bounding_circle(circles: &[Circle]) -> Circle {
    let n = circles.len().max(1) as f64;
    let cx = circles.iter().map(|c| c.x).sum::<f64>() / n;
    let cy = circles.iter().map(|c| c.y).sum::<f64>() / n;
    let r = circles
        .iter()
        .map(|c| (c.x - cx).hypot(c.y - cy) + c.r)
        .fold(0.0, f64::max);
    Circle::new(cx, cy, r)
}

/// Smallest circle enclosing all of `circles`.
pub fn enclose(circles: &[Circle]) -> Circle {
    let mut basis: Vec<Circle> = Vec::new();
    let mut enc: Option<Circle> = None;
    let mut i = 0;

    while i < circles.len() {
        let p = circles[i];
        match enc {
            Some(e) if encloses_weak(&e, &p) => i += 1,
            _ => match extend_basis(&basis, p) {
                Some(extended) => {
                    basis = extended;
                    enc = Some(enclose_basis(&basis));
                    i = 0;
                }
                None => return bounding_circle(circles),
            },
        }
    }

    enc.unwrap_or_default()
}

/// Lay out one circle per value, area proportional to the value, inside the
/// unit circle centred on the origin.
///
/// Output is in input order. Larger values are packed first.
pub fn pack_circles(values: &[f64]) -> Vec<PackedCircle> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));

    let mut circles: Vec<Circle> = order
        .iter()
        .map(|&idx| Circle::new(0.0, 0.0, values[idx].max(f64::MIN_POSITIVE).sqrt()))
        .collect();
    let enc = pack_siblings(&mut circles);
    let scale = if enc.r > 0.0 { 1.0 / enc.r } else { 1.0 };

    let mut packed = vec![
        PackedCircle {
            circle: Circle::default(),
            datum: 0.0,
        };
        values.len()
    ];
    for (circle, &idx) in circles.iter().zip(&order) {
        packed[idx] = PackedCircle {
            circle: Circle::new(circle.x * scale, circle.y * scale, circle.r * scale),
            datum: values[idx],
        };
    }
    packed
}
