use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{AttributeArgs, Ident, ItemFn, Lit, Meta, NestedMeta};

///
/// Run an async test against a freshly spawned function.
///
/// The body sees the running function as `app`. `bootstrap = "Users"` seeds a few
/// users before the body runs. The test database is dropped afterwards.
///
#[proc_macro_attribute]
pub fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = syn::parse_macro_input!(args as AttributeArgs);
    let test_fn = syn::parse_macro_input!(item as ItemFn);

    expand_test(&args, test_fn)
        .unwrap_or_else(|error| error.to_compile_error())
        .into()
}

fn expand_test(args: &[NestedMeta], mut test_fn: ItemFn) -> syn::Result<TokenStream2> {
    let variant = bootstrap_variant(args)?;

    if test_fn.sig.asyncness.take().is_none() {
        return Err(syn::Error::new_spanned(
            test_fn.sig.fn_token,
            "Test function must be async",
        ));
    }

    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = test_fn;

    Ok(quote! {
        #[test]
        #(#attrs)*
        #vis #sig {
            actix_rt::System::new().block_on(async {
                let app = crate::helpers::spawn_app(crate::helpers::BootstrapType::#variant).await;

                #block

                app.db_pool.close().await;
                crate::helpers::teardown(&app.settings.database).await;
            })
        }
    })
}

/// Seed variant named by `bootstrap = "..."`, `Default` when absent.
fn bootstrap_variant(args: &[NestedMeta]) -> syn::Result<Ident> {
    let mut variant = None;

    for arg in args {
        let value = match arg {
            NestedMeta::Meta(Meta::NameValue(pair)) if pair.path.is_ident("bootstrap") => {
                &pair.lit
            }
            _ => return Err(syn::Error::new_spanned(arg, "Unknown argument specified")),
        };

        let name = match value {
            Lit::Str(name) => name,
            _ => return Err(syn::Error::new_spanned(value, "Expected a string")),
        };

        if variant.is_some() {
            return Err(syn::Error::new_spanned(arg, "Duplicate bootstrap argument"));
        }

        variant = Some(name.parse::<Ident>().map_err(|_| {
            syn::Error::new(name.span(), "Bootstrap must name a BootstrapType variant")
        })?);
    }

    Ok(variant.unwrap_or_else(|| Ident::new("Default", Span::call_site())))
}
