use varsig_model::Variance;

/// Combines a type parameter's declared variance with the use-site variance of the argument
/// supplied for it.
///
/// | declared \ use-site | invariant | in        | out       |
/// |---------------------|-----------|-----------|-----------|
/// | invariant           | invariant | invariant | invariant |
/// | in                  | invariant | in        | invariant |
/// | out                 | invariant | invariant | out       |
pub fn effective_variance(declared: Variance, use_site: Variance) -> Variance {
    match (declared, use_site) {
        (Variance::Out, Variance::Out) => Variance::Out,
        (Variance::In, Variance::In) => Variance::In,
        _ => Variance::Invariant,
    }
}
