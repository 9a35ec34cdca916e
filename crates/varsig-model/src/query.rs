use std::collections::{HashSet, VecDeque};

use crate::{DeclId, DeclarationKind, FqName, TypeModel};

/// Lexical ancestry of a declaration, nearest first, starting with the declaration itself.
pub struct ParentsWithSelf<'a> {
    env: &'a dyn TypeModel,
    next: Option<DeclId>,
}

impl Iterator for ParentsWithSelf<'_> {
    type Item = DeclId;

    fn next(&mut self) -> Option<DeclId> {
        let current = self.next.take()?;
        // Parents precede children, so a non-decreasing link is malformed; stop instead of looping.
        self.next = self
            .env
            .declaration(current)
            .and_then(|decl| decl.parent)
            .filter(|parent| *parent < current);
        Some(current)
    }
}

pub fn parents_with_self(env: &dyn TypeModel, decl: DeclId) -> ParentsWithSelf<'_> {
    ParentsWithSelf {
        env,
        next: Some(decl),
    }
}

/// Breadth-first walk over a callable and everything it transitively overrides.
///
/// With `use_original`, the overridden set of each node is read from its un-substituted
/// original. Every member is produced once, even across diamond-shaped hierarchies.
pub struct OverriddenWithSelf<'a> {
    env: &'a dyn TypeModel,
    use_original: bool,
    queue: VecDeque<DeclId>,
    seen: HashSet<DeclId>,
}

impl Iterator for OverriddenWithSelf<'_> {
    type Item = DeclId;

    fn next(&mut self) -> Option<DeclId> {
        let current = self.queue.pop_front()?;
        let env = self.env;

        let source = if self.use_original {
            original_of(env, current)
        } else {
            current
        };
        let overridden = env
            .declaration(source)
            .and_then(|decl| decl.kind.callable_member())
            .map(|member| member.overridden.as_slice())
            .unwrap_or_default();
        for next in overridden {
            if self.seen.insert(*next) {
                self.queue.push_back(*next);
            }
        }

        Some(current)
    }
}

pub fn overridden_with_self(
    env: &dyn TypeModel,
    decl: DeclId,
    use_original: bool,
) -> OverriddenWithSelf<'_> {
    let mut seen = HashSet::new();
    seen.insert(decl);
    OverriddenWithSelf {
        env,
        use_original,
        queue: VecDeque::from([decl]),
        seen,
    }
}

/// First member in `decl`'s override closure (itself included) matching `predicate`.
pub fn first_overridden(
    env: &dyn TypeModel,
    decl: DeclId,
    use_original: bool,
    mut predicate: impl FnMut(DeclId) -> bool,
) -> Option<DeclId> {
    overridden_with_self(env, decl, use_original).find(|candidate| predicate(*candidate))
}

/// The un-substituted declaration `decl` was copied from, or `decl` itself.
pub fn original_of(env: &dyn TypeModel, decl: DeclId) -> DeclId {
    env.declaration(decl)
        .and_then(|def| def.kind.callable_member())
        .and_then(|member| member.original)
        .unwrap_or(decl)
}

/// Maps a property accessor to its property; any other declaration maps to itself.
pub fn property_if_accessor(env: &dyn TypeModel, decl: DeclId) -> DeclId {
    match env.declaration(decl).map(|def| &def.kind) {
        Some(DeclarationKind::PropertyAccessor { property, .. }) => *property,
        _ => decl,
    }
}

/// Fully-qualified name of a declaration, or `None` for local declarations (anything nested in
/// a callable or a value parameter).
pub fn fq_name_of(env: &dyn TypeModel, decl: DeclId) -> Option<FqName> {
    let def = env.declaration(decl)?;
    match &def.kind {
        DeclarationKind::Package => Some(FqName::new(def.name.clone())),
        DeclarationKind::Class(id) => env.class(*id).map(|class| class.fq_name.clone()),
        DeclarationKind::File => match def.parent {
            Some(parent) if parent < decl => fq_name_of(env, parent),
            _ => Some(FqName::root()),
        },
        DeclarationKind::ValueParameter | DeclarationKind::LocalVariable => None,
        DeclarationKind::Function(_)
        | DeclarationKind::Property(_)
        | DeclarationKind::PropertyAccessor { .. } => {
            let container = match def.parent {
                Some(parent) if parent < decl => parent,
                _ => return Some(FqName::root().child(&def.name)),
            };
            let container_def = env.declaration(container)?;
            if container_def.is_callable_member()
                || matches!(
                    container_def.kind,
                    DeclarationKind::ValueParameter | DeclarationKind::LocalVariable
                )
            {
                return None;
            }
            Some(fq_name_of(env, container)?.child(&def.name))
        }
    }
}
