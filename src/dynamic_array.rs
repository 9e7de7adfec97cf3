use std::alloc::{self, Layout, alloc, dealloc, realloc};
use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::{mem, slice};

use tracing::{debug, trace};

use crate::error::{ListError, Result};
use crate::list::List;

/// Capacity of a freshly constructed or cleared array, and the floor the
/// buffer is never shrunk below.
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous growable array.
///
/// Before every insertion and after every removal the buffer is resized:
/// - full buffers double (an empty zero-capacity buffer jumps to [`DEFAULT_CAPACITY`]),
/// - buffers less than half used are halved, but not below [`DEFAULT_CAPACITY`],
/// - anything else is left alone.
///
/// Index-addressed operations return [`ListError::IndexOutOfRange`] instead of
/// panicking; the `Index` impls panic like a slice would.
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    marker: PhantomData<T>,
}

#[macro_export]
macro_rules! dynarray {
    ( $( $x:expr ),* $(,)? ) => {
        {
            let mut temp_array = $crate::DynamicArray::new();
            $(
                temp_array.push($x);
            )*
            temp_array
        }
    };
}

impl<T> DynamicArray<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Constructs a new, empty `DynamicArray<T>` with room for
    /// [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Constructs an empty array holding exactly `capacity` slots.
    ///
    /// A capacity of zero does not allocate; the first insertion grows the
    /// buffer to [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            marker: PhantomData,
        };
        array.reallocate(capacity);
        array
    }

    /// Like [`with_capacity`](Self::with_capacity) but takes a signed capacity,
    /// rejecting negative values with [`ListError::InvalidArgument`].
    pub fn try_with_capacity(capacity: isize) -> Result<Self> {
        usize::try_from(capacity)
            .map(Self::with_capacity)
            .map_err(|_| ListError::InvalidArgument { capacity })
    }

    /// Layout of the live allocation. Only meaningful while `cap > 0`.
    fn current_layout(&self) -> Layout {
        // this layout cannot error because it describes an allocation that already exists
        unsafe { Layout::array::<T>(self.cap).unwrap_unchecked() }
    }

    /// Moves the buffer to an allocation of exactly `new_cap` slots.
    fn reallocate(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);
        if new_cap == self.cap {
            return;
        }
        trace!(
            old_capacity = self.cap,
            new_capacity = new_cap,
            len = self.len,
            "reallocating buffer"
        );

        if Self::IS_ZST {
            self.cap = new_cap;
            return;
        }

        debug_assert!(new_cap > 0, "buffers are never shrunk to zero");
        let new_layout = Layout::array::<T>(new_cap).expect("Allocation too large");
        let handle = if self.cap == 0 {
            unsafe { alloc(new_layout) }
        } else {
            let old_handle = self.ptr.as_ptr() as *mut u8;
            unsafe { realloc(old_handle, self.current_layout(), new_layout.size()) }
        };

        self.ptr =
            NonNull::new(handle as *mut T).unwrap_or_else(|| alloc::handle_alloc_error(new_layout));
        self.cap = new_cap;
    }

    /// Applies the grow/shrink policy. Afterwards `cap > len`.
    fn resize(&mut self) {
        let new_cap = if self.cap == self.len {
            if self.cap == 0 {
                DEFAULT_CAPACITY
            } else {
                self.cap.checked_mul(2).expect("capacity overflow")
            }
        } else if self.cap / 2 > self.len {
            (self.cap / 2).max(DEFAULT_CAPACITY)
        } else {
            return;
        };
        self.reallocate(new_cap);
    }

    fn check_index(&self, index: usize, for_insert: bool) -> Result<()> {
        let in_range = if for_insert {
            index <= self.len
        } else {
            index < self.len
        };
        if in_range {
            Ok(())
        } else {
            Err(ListError::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Adds `item` to the end of the array, increasing its length by 1.
    pub fn push(&mut self, item: T) {
        self.resize();
        debug_assert!(self.len < self.cap);
        unsafe { self.ptr.add(self.len).write(item) };
        self.len += 1;
    }

    /// Inserts `item` at `index`, shifting every element after it one slot
    /// to the right. `index` may equal `len()`, which appends.
    pub fn insert(&mut self, index: usize, item: T) -> Result<()> {
        self.check_index(index, true)?;

        if index == self.len {
            self.push(item);
            return Ok(());
        }

        self.resize();
        unsafe {
            let slot = self.ptr.add(index);
            ptr::copy(slot.as_ptr(), slot.add(1).as_ptr(), self.len - index);
            slot.write(item);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting every element
    /// after it one slot to the left.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index, false)?;

        let item = unsafe {
            let slot = self.ptr.add(index);
            let item = slot.read();
            ptr::copy(slot.add(1).as_ptr(), slot.as_ptr(), self.len - index - 1);
            item
        };
        self.len -= 1;
        self.resize();
        Ok(item)
    }

    /// Removes the first element equal to `item`.
    /// Returns false, leaving the array untouched, when no element matches.
    pub fn remove_item<Q: ?Sized>(&mut self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        match self.index_of(item) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, false)?;
        Ok(unsafe { self.ptr.add(index).as_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, false)?;
        Ok(unsafe { self.ptr.add(index).as_mut() })
    }

    /// Overwrites the element at `index`, returning the previous value.
    /// Never changes the capacity.
    pub fn set(&mut self, index: usize, item: T) -> Result<T> {
        Ok(mem::replace(self.get_mut(index)?, item))
    }

    /// Position of the first element equal to `item`, scanning from the front.
    pub fn index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        self.as_slice().iter().position(|x| x == item)
    }

    /// Position of the last element equal to `item`, scanning from the back.
    pub fn last_index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        self.as_slice().iter().rposition(|x| x == item)
    }

    /// Returns true if any element equals `item`.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        self.index_of(item).is_some()
    }

    /// Returns the number of elements in the array.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every element and returns the buffer to [`DEFAULT_CAPACITY`].
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        // zero the length first so a panicking destructor leaks instead of double dropping
        self.len = 0;
        unsafe { ptr::drop_in_place(elements) };
        debug!(capacity = self.cap, "cleared array");
        self.reallocate(DEFAULT_CAPACITY);
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> List<T> for DynamicArray<T> {
    fn push(&mut self, item: T) {
        Self::push(self, item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<()> {
        Self::insert(self, index, item)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        Self::remove(self, index)
    }

    fn remove_item<Q: ?Sized>(&mut self, item: &Q) -> bool
    where
        T: PartialEq<Q>,
    {
        Self::remove_item(self, item)
    }

    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<T> {
        Self::set(self, index, item)
    }

    fn index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        Self::index_of(self, item)
    }

    fn last_index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
    where
        T: PartialEq<Q>,
    {
        Self::last_index_of(self, item)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        Self::clear(self)
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
        if self.cap == 0 || Self::IS_ZST {
            return;
        }
        unsafe { dealloc(self.ptr.as_ptr() as *mut u8, self.current_layout()) };
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Copies the elements into a buffer of the same capacity.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.cap);
        for item in self.as_slice() {
            // written directly so the resize policy can't reshape the copy
            unsafe { out.ptr.add(out.len).write(item.clone()) };
            out.len += 1;
        }
        out
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, ix: usize) -> &Self::Output {
        assert!(ix < self.len, "Index out of bounds.");
        unsafe { self.ptr.add(ix).as_ref() }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, ix: usize) -> &mut Self::Output {
        assert!(ix < self.len, "Index out of bounds.");
        unsafe { self.ptr.add(ix).as_mut() }
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Renders as `[a, b, c]` using each element's `Display`.
impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

unsafe impl<T: Send> Send for DynamicArray<T> {}
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<DynamicArray<T>> for Vec<T> {
    fn eq(&self, other: &DynamicArray<T>) -> bool {
        other == self
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
