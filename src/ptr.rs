use alloc::boxed::Box;
use core::ptr::NonNull;

#[inline(always)]
pub(crate) fn alloc<T>(x: T) -> NonNull<T> {
  // NB: `Box::into_raw` never returns null.

  unsafe { NonNull::new_unchecked(Box::into_raw(Box::new(x))) }
}

#[inline(always)]
pub(crate) unsafe fn free<T>(x: NonNull<T>) {
  drop(Box::from_raw(x.as_ptr()))
}

#[inline(always)]
pub(crate) fn from_mut_ref<T>(x: &mut T) -> NonNull<T>
where
  T: ?Sized
{
  NonNull::from(x)
}

#[inline(always)]
pub(crate) unsafe fn as_ref<'a, T>(x: NonNull<T>) -> &'a T
where
  T: ?Sized
{
  &*x.as_ptr()
}

#[inline(always)]
pub(crate) unsafe fn as_mut_ref<'a, T>(x: NonNull<T>) -> &'a mut T
where
  T: ?Sized
{
  &mut *x.as_ptr()
}
