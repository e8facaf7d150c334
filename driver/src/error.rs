use kernel::KernelError;

/// Maps store-level failures into the kernel error context.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
