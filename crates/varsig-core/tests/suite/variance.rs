use pretty_assertions::assert_eq;
use proptest::prelude::*;
use varsig_core::{effective_variance, Variance};

fn any_variance() -> impl Strategy<Value = Variance> {
    prop_oneof![
        Just(Variance::Invariant),
        Just(Variance::In),
        Just(Variance::Out),
    ]
}

#[test]
fn matching_variances_are_kept() {
    assert_eq!(effective_variance(Variance::Out, Variance::Out), Variance::Out);
    assert_eq!(effective_variance(Variance::In, Variance::In), Variance::In);
}

#[test]
fn conflicting_variances_are_invariant() {
    assert_eq!(
        effective_variance(Variance::Out, Variance::In),
        Variance::Invariant
    );
    assert_eq!(
        effective_variance(Variance::In, Variance::Out),
        Variance::Invariant
    );
}

proptest! {
    #[test]
    fn invariant_on_either_side_is_invariant(other in any_variance()) {
        prop_assert_eq!(effective_variance(Variance::Invariant, other), Variance::Invariant);
        prop_assert_eq!(effective_variance(other, Variance::Invariant), Variance::Invariant);
    }

    #[test]
    fn effective_variance_is_symmetric(a in any_variance(), b in any_variance()) {
        prop_assert_eq!(effective_variance(a, b), effective_variance(b, a));
    }

    #[test]
    fn variant_result_requires_agreement(a in any_variance(), b in any_variance()) {
        let result = effective_variance(a, b);
        if result != Variance::Invariant {
            prop_assert_eq!(a, b);
            prop_assert_eq!(result, a);
        }
    }
}
