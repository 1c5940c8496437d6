use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::parse::Parser;
use syn::{Error, ItemFn, LitInt, ReturnType, Type};

#[derive(Default)]
struct MainArgs {
    profile: Option<TokenStream>,
    threads: Option<LitInt>,
}

impl MainArgs {
    fn parse(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("threads") {
            self.threads = Some(meta.value()?.parse()?);
            return Ok(());
        }

        let constructor = if meta.path.is_ident("event_loop") {
            quote! { event_loop }
        } else if meta.path.is_ident("balanced") {
            quote! { balanced }
        } else if meta.path.is_ident("default") {
            quote! { default }
        } else {
            return Err(meta.error(
                "unknown runtime profile; use event_loop, balanced or default (plus threads = N)",
            ));
        };

        if self.profile.replace(constructor).is_some() {
            return Err(meta.error("only one runtime profile may be selected"));
        }
        Ok(())
    }

    fn config(&self) -> TokenStream {
        let constructor = self.profile.clone().unwrap_or_else(|| quote! { default });
        let base = quote! { ::ignite_runtime::RuntimeConfig::#constructor() };
        match &self.threads {
            Some(threads) => quote! { #base.with_worker_threads(#threads) },
            None => base,
        }
    }
}

/// Expands `#[ignite_runtime::main(profile, threads = N)]` over an `async fn main`.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            input.sig.fn_token,
            "#[ignite_runtime::main] needs an `async fn`",
        )
        .to_compile_error();
    }
    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.ident,
            "#[ignite_runtime::main] needs a `Result` return type so runtime build errors can propagate",
        )
        .to_compile_error();
    }

    let mut parsed = MainArgs::default();
    let parser = syn::meta::parser(|meta| parsed.parse(&meta));
    if let Err(err) = parser.parse2(args) {
        return err.to_compile_error();
    }
    let config = parsed.config();

    let ItemFn { attrs, vis, mut sig, block } = input;
    sig.asyncness = None;

    quote! {
        #(#attrs)*
        #vis #sig {
            let runtime = ::ignite_runtime::build_runtime_with_config(&#config)?;
            runtime.block_on(async move #block)
        }
    }
}

fn returns_result(output: &ReturnType) -> bool {
    match output {
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) => path.path.segments.last().is_some_and(|seg| seg.ident == "Result"),
            _ => false,
        },
        ReturnType::Default => false,
    }
}
