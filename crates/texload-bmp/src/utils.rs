/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Round a row length up to the 4 byte boundary BMP rows are stored at
pub(crate) const fn padded_row_size(row_size: usize) -> Option<usize> {
    match row_size.checked_add(3) {
        Some(size) => Some(size & !3),
        None => None
    }
}

/// Swap the first and third channel of every three byte pixel,
/// turning BGR into RGB and vice versa
pub(crate) fn swap_red_blue(pixels: &mut [u8]) {
    for pix in pixels.chunks_exact_mut(3) {
        pix.swap(0, 2);
    }
}

/// Reverse the order of `row_size` long rows in `buf`
pub(crate) fn flip_rows(buf: &mut [u8], row_size: usize) {
    if row_size == 0 {
        return;
    }
    let mid = buf.len() / 2;
    let (in_img_top, in_img_bottom) = buf.split_at_mut(mid);

    // for odd heights the middle row is split across both halves
    // and skipped by the exact chunk iterators, it stays in place
    for (in_dim, out_dim) in in_img_top
        .chunks_exact_mut(row_size)
        .zip(in_img_bottom.rchunks_exact_mut(row_size))
    {
        in_dim.swap_with_slice(out_dim);
    }
}
