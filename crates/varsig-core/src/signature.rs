use varsig_model::{DeclId, KotlinType, TypeArgument, TypeConstructor, Variance};

use crate::{MappingContext, TypeMappingMode, MAPPING_TARGET};

const NON_EXISTENT_CLASS: &str = "Lerror/NonExistentClass;";
const OBJECT: &str = "Ljava/lang/Object;";

impl MappingContext<'_> {
    /// Renders `ty` as a JVM generic signature (`Ljava/util/List<+Ljava/lang/Number;>;`).
    pub fn generic_signature(&self, ty: &KotlinType, mode: &TypeMappingMode) -> String {
        let mut out = String::new();
        self.write_type(&mut out, ty, mode);
        out
    }

    /// Mode for the type of a value parameter of `callable`.
    ///
    /// Parameters of the mutating collection members keep every wildcard, ahead of any
    /// `@JvmSuppressWildcards` in scope.
    pub fn value_parameter_mode(
        &self,
        callable: Option<DeclId>,
        ty: &KotlinType,
    ) -> TypeMappingMode {
        if !ty.arguments.is_empty() && self.is_method_with_declaration_site_wildcards(callable) {
            return TypeMappingMode::generic_argument();
        }
        self.extract_type_mapping_mode_from_annotation(callable, ty, false)
            .unwrap_or_else(|| self.optimal_mode_for_value_parameter(ty))
    }

    /// Mode for the return type of `callable`.
    pub fn return_type_mode(
        &self,
        callable: Option<DeclId>,
        ty: &KotlinType,
        is_annotation_method: bool,
    ) -> TypeMappingMode {
        self.extract_type_mapping_mode_from_annotation(callable, ty, is_annotation_method)
            .unwrap_or_else(|| self.optimal_mode_for_return_type(ty, is_annotation_method))
    }

    pub fn value_parameter_signature(&self, callable: Option<DeclId>, ty: &KotlinType) -> String {
        self.generic_signature(ty, &self.value_parameter_mode(callable, ty))
    }

    pub fn return_type_signature(
        &self,
        callable: Option<DeclId>,
        ty: &KotlinType,
        is_annotation_method: bool,
    ) -> String {
        self.generic_signature(ty, &self.return_type_mode(callable, ty, is_annotation_method))
    }

    fn write_type(&self, out: &mut String, ty: &KotlinType, mode: &TypeMappingMode) {
        let env = self.env();
        match &ty.constructor {
            TypeConstructor::TypeParam(id) => match env.type_param(*id) {
                Some(param) => {
                    out.push('T');
                    out.push_str(&param.name);
                    out.push(';');
                }
                None => out.push_str(NON_EXISTENT_CLASS),
            },
            TypeConstructor::Unresolved(name) => {
                tracing::debug!(target: MAPPING_TARGET, %name, "unresolved type in signature");
                out.push_str(NON_EXISTENT_CLASS);
            }
            TypeConstructor::Class(id) => {
                let Some(class) = env.class(*id) else {
                    out.push_str(NON_EXISTENT_CLASS);
                    return;
                };

                if *id == env.builtins().array {
                    out.push('[');
                    match ty.argument(0) {
                        // An `in` element may be any supertype.
                        Some(TypeArgument::Projection {
                            variance: Variance::In,
                            ..
                        })
                        | Some(TypeArgument::Star)
                        | None => out.push_str(OBJECT),
                        Some(TypeArgument::Projection { variance, ty: element }) => {
                            let element_mode = mode.to_generic_argument_mode(*variance, true);
                            self.write_type(out, element, &element_mode);
                        }
                    }
                    return;
                }

                out.push('L');
                out.push_str(&class.jvm_internal_name);
                self.write_arguments(out, ty, mode);
                out.push(';');
            }
        }
    }

    fn write_arguments(&self, out: &mut String, ty: &KotlinType, mode: &TypeMappingMode) {
        if ty.arguments.is_empty() {
            return;
        }

        let env = self.env();
        out.push('<');
        for (index, argument) in ty.arguments.iter().enumerate() {
            let parameter = env.parameter(&ty.constructor, index);
            let argument_type = match argument {
                TypeArgument::Star => None,
                // `In<Nothing>` accepts the same values as `In<*>`.
                TypeArgument::Projection { ty, .. }
                    if env.is_nothing_constructor(&ty.constructor)
                        && parameter.is_some_and(|param| param.variance == Variance::In) =>
                {
                    None
                }
                TypeArgument::Projection { ty, .. } => Some(ty),
            };
            let Some(argument_type) = argument_type else {
                out.push('*');
                continue;
            };

            let argument_mode = mode.update_argument_mode_from_annotations(argument_type);
            let variance = self.variance_for_wildcard(parameter, argument, &argument_mode);
            match variance {
                Variance::Out => out.push('+'),
                Variance::In => out.push('-'),
                Variance::Invariant => {}
            }
            self.write_type(
                out,
                argument_type,
                &argument_mode.to_generic_argument_mode(variance, false),
            );
        }
        out.push('>');
    }
}
