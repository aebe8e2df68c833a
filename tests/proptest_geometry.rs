use pantrack::ir::{middle_point, FeatureId, LonLat};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn single_vertex_is_its_own_midpoint(c in proptest_helpers::arb_lonlat()) {
        prop_assert_eq!(middle_point(&[c]), Some(c));
    }

    #[test]
    fn two_vertices_average_per_axis(
        a in proptest_helpers::arb_lonlat(),
        b in proptest_helpers::arb_lonlat(),
    ) {
        let mid = middle_point(&[a, b]).expect("midpoint");
        prop_assert_eq!(mid, LonLat::new((a.lon + b.lon) / 2.0, (a.lat + b.lat) / 2.0));
    }

    #[test]
    fn longer_paths_pick_an_existing_vertex(path in proptest_helpers::arb_path(3, 40)) {
        let mid = middle_point(&path).expect("midpoint");
        prop_assert_eq!(mid, path[(path.len() - 1) / 2]);
    }

    #[test]
    fn ids_always_have_the_generated_layout(bits in any::<u128>()) {
        let id = FeatureId::from_bits(bits);
        prop_assert!(id.is_well_formed(), "{}", id);
    }
}
