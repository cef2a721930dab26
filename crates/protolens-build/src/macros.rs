/// Build-script helper: generate accessor modules for a JSON descriptor into
/// `OUT_DIR`, resolving the descriptor against the options' include paths.
///
/// Mount the result with `protolens::include_accessors!()`.
#[macro_export]
macro_rules! build {
    ($descriptor:expr) => {
        $crate::build!($descriptor, $crate::CompileOptions::default())
    };
    ($descriptor:expr, $options:expr) => {{
        //
        // CARGO
        //

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-env-changed={}", $crate::CORE_CRATE_ENV);

        let options: $crate::CompileOptions = $options;
        let descriptor = options.resolve($descriptor);
        println!("cargo:rerun-if-changed={}", descriptor.display());

        // Get the output directory set by Cargo
        let out_dir = ::std::env::var("OUT_DIR").expect("OUT_DIR not set");

        //
        // ACCESSOR CODE
        //

        let mut sink = $crate::DirSink::new(out_dir);
        $crate::build_descriptor_file(descriptor, &options, &mut sink)
    }};
}
