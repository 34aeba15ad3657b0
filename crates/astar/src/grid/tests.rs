//! Board, palette and rendering tests for the demonstration grid.

use super::*;
use crate::search::{find, find_with, Graph, LookupError, SearchCfg};

fn uniform(side: usize, palette: &Palette, shade: usize) -> Board {
    let mut b = Board::new(side);
    for label in 0..b.count() as i64 {
        assert!(b.set(label, palette.shades()[shade]));
    }
    b
}

#[test]
fn default_palette_darkens_to_black() {
    let p = Palette::default();
    assert_eq!(
        p.shades(),
        &[
            Rgba::new(102, 152, 229, 255),
            Rgba::new(89, 132, 216, 255),
            Rgba::new(76, 112, 203, 255),
            Rgba::new(63, 92, 190, 255),
            Rgba::BLACK,
        ]
    );
    assert_eq!(p.index(Rgba::BLACK), Some(4));
    assert_eq!(p.index(Rgba::WHITE), None);
}

#[test]
fn randomise_is_reproducible_per_token() {
    let p = Palette::default();
    let tok = ReplayToken { seed: 7, index: 0 };
    let mut a = Board::new(30);
    let mut b = Board::new(30);
    a.randomise(&p, tok);
    b.randomise(&p, tok);
    assert_eq!(a, b);
    b.randomise(&p, ReplayToken { seed: 7, index: 1 });
    assert_ne!(a, b);
    assert!((0..a.count() as i64).all(|l| a.cell(l).and_then(|c| p.index(c)).is_some()));
}

#[test]
fn uniform_board_routes_along_the_diagonal() {
    let p = Palette::default();
    let b = uniform(3, &p, 1);
    let res = find_with(&b.search_with(&p), 0, 8, SearchCfg::default());
    assert_eq!(res.route, vec![0, 4, 8]);
    assert_eq!(res.cost, Some(2.0));
}

#[test]
fn dark_centre_is_avoided_and_rendered() {
    let p = Palette::default();
    let mut b = uniform(3, &p, 1);
    b.set(4, Rgba::BLACK);
    let route = find(&b.search_with(&p), 0, 8);
    assert_eq!(route, vec![0, 1, 5, 8]);
    assert_eq!(render(&b, &p), ":::\n:#:\n:::\n");
    b.mark_route(&route, &p);
    assert_eq!(b.mark(8), Some(p.destination()));
    assert_eq!(b.mark(0), Some(p.path()));
    assert_eq!(render(&b, &p), "**:\n:#*\n::@\n");
    assert!(b.clear_route());
    assert!(!b.clear_route());
    assert_eq!(render(&b, &p), ":::\n:#:\n:::\n");
}

#[test]
fn corner_has_three_neighbours_with_shade_costs() {
    let p = Palette::default();
    let mut b = uniform(4, &p, 0);
    b.set(5, p.shades()[3]);
    let n = b.search_with(&p).neighbors(0).unwrap();
    assert_eq!(n.into_iter().collect::<Vec<_>>(), vec![(1, 0.0), (4, 0.0), (5, 3.0)]);
    assert_eq!(b.search_with(&p).estimate(0, 15), 12.0);
}

#[test]
fn lookup_failures_for_off_board_and_unpainted_cells() {
    let p = Palette::default();
    let b = Board::new(4);
    let s = b.search_with(&p);
    assert_eq!(s.neighbors(16), Err(LookupError::UnknownLabel(16)));
    assert_eq!(s.neighbors(-1), Err(LookupError::UnknownLabel(-1)));
    assert!(matches!(
        s.neighbors(0),
        Err(LookupError::Unavailable { label: 0, .. })
    ));
    // A white board cannot be priced: the start has no usable neighbours.
    let res = find_with(&s, 0, 15, SearchCfg::default());
    assert!(res.route.is_empty());
    assert_eq!(res.stats.lookup_failures, 1);
}

#[test]
fn random_board_routes_corner_to_corner() {
    let p = Palette::default();
    let mut b = Board::new(30);
    b.randomise(&p, ReplayToken { seed: 1, index: 0 });
    let goal = b.count() as i64 - 1;
    let route = find(&b.search_with(&p), 0, goal);
    // Every cell is priced and eight-connected, so a route always exists.
    assert_eq!(route.first(), Some(&0));
    assert_eq!(route.last(), Some(&goal));
    for w in route.windows(2) {
        let (a, z) = (w[0] as usize, w[1] as usize);
        assert!((a % 30).abs_diff(z % 30) <= 1 && (a / 30).abs_diff(z / 30) <= 1);
    }
    b.mark_route(&route, &p);
    let text = render(&b, &p);
    assert_eq!(text.lines().count(), 30);
    assert_eq!(text.matches('@').count(), 1);
    assert_eq!(text.matches('*').count(), route.len() - 1);
}
