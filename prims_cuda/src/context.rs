use crate::error::ScanError;
use cust::context::Context;
use cust::function::Function;
use cust::module::Module;
use cust::prelude::*;

static PTX: &str = include_str!("../../resources/prims_gpu.ptx");

/// Owns the CUDA primary context, the in-order command stream every launch
/// is enqueued into, and the compiled kernel module. Passed explicitly to
/// each operation instead of living in a process-wide singleton, so its
/// lifetime is the caller's to manage.
pub struct GpuContext {
    _ctx: Context,
    pub(crate) stream: Stream,
    module: Module,
}

impl GpuContext {
    /// Picks a device, initializes its primary context, compiles the kernel
    /// module, and opens the command stream.
    pub fn new() -> Result<Self, ScanError> {
        let ctx = cust::quick_init().map_err(ScanError::Init)?;
        let module =
            Module::from_ptx(PTX, &[]).map_err(|e| ScanError::Compilation(e.to_string()))?;
        let stream = Stream::new(StreamFlags::NON_BLOCKING, None).map_err(ScanError::Init)?;

        Ok(Self {
            _ctx: ctx,
            stream,
            module,
        })
    }

    /// Looks up a kernel entry point in the compiled module.
    pub(crate) fn function(&self, name: &str) -> Result<Function<'_>, ScanError> {
        self.module
            .get_function(name)
            .map_err(|e| ScanError::Compilation(format!("no kernel `{}`: {}", name, e)))
    }

    /// Blocks the host thread until every launch enqueued so far has
    /// finished.
    pub fn synchronize(&self) -> Result<(), ScanError> {
        self.stream.synchronize().map_err(ScanError::Launch)
    }
}
