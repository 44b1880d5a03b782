use crate::Error;

/// Linear row-major index of `(x, y)`, or `None` outside `width x height`.
pub fn linear_index(width: usize, height: usize, x: isize, y: isize) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return None;
    }
    Some(y * width + x)
}

fn checked_len(width: usize, height: usize, actual: usize) -> Result<usize, Error> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }

    let expected = width.checked_mul(height).ok_or(Error::SizeMismatch {
        expected: usize::MAX,
        actual,
    })?;

    if actual != expected {
        return Err(Error::SizeMismatch { expected, actual });
    }
    Ok(expected)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Image<T> {
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Result<Self, Error> {
        checked_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }

    pub fn as_view_mut(&mut self) -> ImageViewMut<'_, T> {
        ImageViewMut {
            width: self.width,
            height: self.height,
            data: &mut self.data,
        }
    }
}

impl<T: Clone> Image<T> {
    pub fn new_fill(width: usize, height: usize, value: T) -> Self {
        let len = width.checked_mul(height).expect("image size overflow");
        Self {
            width,
            height,
            data: vec![value; len],
        }
    }
}

/// Borrowed, contiguous row-major image.
#[derive(Debug, Clone, Copy)]
pub struct ImageView<'a, T> {
    width: usize,
    height: usize,
    data: &'a [T],
}

impl<'a, T> ImageView<'a, T> {
    pub fn from_slice(width: usize, height: usize, data: &'a [T]) -> Result<Self, Error> {
        checked_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn index(&self, x: isize, y: isize) -> Option<usize> {
        linear_index(self.width, self.height, x, y)
    }

    pub fn get(&self, x: isize, y: isize) -> Option<&'a T> {
        let idx = self.index(x, y)?;
        self.data.get(idx)
    }

    pub fn row(&self, y: usize) -> &'a [T] {
        assert!(y < self.height, "row index out of bounds");
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

/// Mutable counterpart of [`ImageView`].
#[derive(Debug)]
pub struct ImageViewMut<'a, T> {
    width: usize,
    height: usize,
    data: &'a mut [T],
}

impl<'a, T> ImageViewMut<'a, T> {
    pub fn from_slice_mut(width: usize, height: usize, data: &'a mut [T]) -> Result<Self, Error> {
        checked_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn index(&self, x: isize, y: isize) -> Option<usize> {
        linear_index(self.width, self.height, x, y)
    }

    pub fn get(&self, x: isize, y: isize) -> Option<&T> {
        let idx = self.index(x, y)?;
        self.data.get(idx)
    }

    pub fn data(&self) -> &[T] {
        self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        self.data
    }

    pub fn as_view(&self) -> ImageView<'_, T> {
        ImageView {
            width: self.width,
            height: self.height,
            data: self.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Image, ImageView, ImageViewMut, linear_index};
    use crate::Error;

    #[test]
    fn linear_index_rejects_outside() {
        assert_eq!(linear_index(3, 2, 0, 0), Some(0));
        assert_eq!(linear_index(3, 2, 2, 1), Some(5));
        assert_eq!(linear_index(3, 2, -1, 0), None);
        assert_eq!(linear_index(3, 2, 0, -1), None);
        assert_eq!(linear_index(3, 2, 3, 0), None);
        assert_eq!(linear_index(3, 2, 0, 2), None);
    }

    #[test]
    fn view_access_is_row_major() {
        let data = vec![1u32, 2, 3, 4, 5, 6];
        let view = ImageView::from_slice(3, 2, &data).expect("valid view");

        assert_eq!(view.row(0), &[1, 2, 3]);
        assert_eq!(view.row(1), &[4, 5, 6]);
        assert_eq!(view.get(0, 1), Some(&4));
        assert_eq!(view.get(2, 1), Some(&6));
        assert_eq!(view.get(3, 1), None);
        assert_eq!(view.get(-1, 1), None);
    }

    #[test]
    fn construction_validates_size() {
        let data = vec![0u32; 5];
        assert_eq!(
            ImageView::from_slice(3, 2, &data).unwrap_err(),
            Error::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
        assert_eq!(
            Image::from_vec(0, 4, Vec::<u32>::new()).unwrap_err(),
            Error::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn view_mut_writes_through() {
        let mut data = vec![0u32; 6];
        let mut view = ImageViewMut::from_slice_mut(2, 3, &mut data).expect("valid view");
        let idx = view.index(1, 2).expect("in bounds");
        view.data_mut()[idx] = 42;
        assert!(view.index(2, 0).is_none());
        assert_eq!(view.as_view().get(1, 2), Some(&42));
        assert_eq!(data[5], 42);
    }
}
