use cuda_builder::CudaBuilder;

// Regenerates ../resources/prims_gpu.ptx from the prims_gpu crate. Kept out
// of the default build so that the workspace compiles without the NVVM
// toolchain; rename to build.rs and add cuda_builder = "0.3.0" to
// [build-dependencies] to rebuild the kernels from source.
fn main() {
    CudaBuilder::new("../prims_gpu")
        .copy_to("../resources/prims_gpu.ptx")
        .build()
        .unwrap();
}
