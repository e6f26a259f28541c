/// Sink an animal speaks into.
pub trait Voice {
    fn emit(&mut self, message: &str);
}

impl<V: Voice + ?Sized> Voice for &mut V {
    fn emit(&mut self, message: &str) {
        (**self).emit(message);
    }
}
