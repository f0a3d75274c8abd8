//! Declarative macros for building parameters and registering resources.

/// Build [`UrlParams`](crate::url::UrlParams) in insertion order.
///
/// # Example
///
/// ```rust,ignore
/// let params = url_params! { "id" => 1, "tag" => ["a", "b"] };
/// ```
#[macro_export]
macro_rules! url_params {
    () => {
        $crate::url::UrlParams::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::url::UrlParams::new();
        $(
            params.insert($key, $value);
        )+
        params
    }};
}

/// Register a resource from positional arguments.
///
/// Two arguments are `(prefix, source)`; three or more are
/// `(name, prefix, middleware..., source)`. Evaluates to the result of
/// [`RouteTableBuilder::resources`](crate::table::RouteTableBuilder::resources).
///
/// # Example
///
/// ```rust,ignore
/// resources!(builder, "posts", "/posts", auth, "posts")?;
/// resources!(builder, "/channels", "channels")?;
/// ```
#[macro_export]
macro_rules! resources {
    ($builder:expr, $($arg:expr),+ $(,)?) => {{
        match $crate::resource::Resource::from_args(::std::vec![
            $( $crate::resource::ResourceArg::from($arg) ),+
        ]) {
            ::core::result::Result::Ok(resource) => $builder.resources(resource),
            ::core::result::Result::Err(err) => ::core::result::Result::Err(err),
        }
    }};
}
