/// `true` si `$ty` implementa `$trait`, resuelto en compilación.
///
/// El impl inherente sólo existe cuando se cumple el bound; si no, la
/// resolución cae en la constante del trait genérico, que vale `false`.
macro_rules! implements {
  ($ty:ty: $trait:path) => {{
    #[allow(dead_code)]
    trait DoesNotImpl {
      const IMPLS: bool = false;
    }
    impl<T: ?Sized> DoesNotImpl for T {}

    #[allow(dead_code)]
    struct Wrapper<T: ?Sized>(core::marker::PhantomData<T>);

    #[allow(dead_code)]
    impl<T: $trait> Wrapper<T> {
      const IMPLS: bool = true;
    }

    <Wrapper<$ty>>::IMPLS
  }};
}
