pub static OUTPUT_HELP: &str = "PPM file to write the decoded pixels to

Outputs are paired with inputs in the order given. Pixels are written
as a binary (P6) PPM, which most image viewers can open.";

pub static SEARCH_DIR_HELP: &str = "Directory prefix to search for textures in

May be given multiple times. The texture name is always tried as given
first, then joined to each prefix in order. When absent, the prefixes
./ ../ ../../ and ../Resources/ are searched.";

pub static BOTTOM_UP_HELP: &str = "Keep rows in stored bottom-up order

Bitmaps store their last row first. By default rows are reordered so the
first row written is the top of the image, pass this to keep the stored
order, e.g for uploading to APIs whose first texture row is the bottom.";
