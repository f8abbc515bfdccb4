/**
 * Simple name of a Rust type
 *
 * Module path and generic arguments are stripped, so `app::model::Book<u8>` becomes `Book`
 */
pub fn simple_type_name<T: ?Sized>() -> &'static str {
    strip_type_path(std::any::type_name::<T>())
}

fn strip_type_path(full_name: &'static str) -> &'static str {
    let without_generics = match full_name.find('<') {
        Some(generics_start) => &full_name[..generics_start],
        None => full_name,
    };

    match without_generics.rfind("::") {
        Some(separator) => &without_generics[separator + 2..],
        None => without_generics,
    }
}
