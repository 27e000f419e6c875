use crate::error::Result;
use image::ImageFormat;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::path::Path;

/// Image XObject ready to be placed on a page, with its pixel size.
struct EmbeddedImage {
    width: u32,
    height: u32,
    id: ObjectId,
}

/// Build a document with one page per image, each page sized to the image's
/// pixel dimensions and the image drawn at natural scale.
pub fn images_to_document<P: AsRef<Path>>(inputs: &[P]) -> Result<Document> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids = Vec::with_capacity(inputs.len());

    for input in inputs {
        let input = input.as_ref();
        log::info!("Adding {}...", input.display());

        let image = embed_image(&mut doc, input)?;
        let (width, height) = (i64::from(image.width), i64::from(image.height));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width.into(),
                        0.into(),
                        0.into(),
                        height.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec!["Im0".into()]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), Object::Integer(width), Object::Integer(height)],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    "Im0" => image.id,
                },
            },
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    Ok(doc)
}

fn embed_image(doc: &mut Document, path: &Path) -> Result<EmbeddedImage> {
    let bytes = std::fs::read(path)?;

    if image::guess_format(&bytes).ok() == Some(ImageFormat::Jpeg) {
        if let Some(image) = embed_jpeg(doc, &bytes) {
            return Ok(image);
        }
    }

    let decoded = image::load_from_memory(&bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    let has_alpha = decoded.color().has_alpha();
    let rgba = decoded.to_rgba8();

    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    let mut alpha = Vec::with_capacity(rgba.len() / 4);
    for pixel in rgba.pixels() {
        rgb.extend_from_slice(&pixel.0[..3]);
        alpha.push(pixel.0[3]);
    }

    let mut image_dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(width),
        "Height" => i64::from(height),
        "ColorSpace" => "DeviceRGB",
        "BitsPerComponent" => 8,
    };

    if has_alpha {
        let mask_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceGray",
                "BitsPerComponent" => 8,
            },
            alpha,
        ));
        image_dict.set("SMask", mask_id);
    }

    let id = doc.add_object(Stream::new(image_dict, rgb));
    Ok(EmbeddedImage { width, height, id })
}

/// Embed JPEG data untouched. Returns `None` for frames PDF's DCT filter
/// can't take (lossless, arithmetic coded, 12-bit, odd component counts),
/// which then go through the decode path.
fn embed_jpeg(doc: &mut Document, bytes: &[u8]) -> Option<EmbeddedImage> {
    let header = read_jpeg_header(bytes)?;
    let color_space = match header.components {
        1 => "DeviceGray",
        3 => "DeviceRGB",
        4 => "DeviceCMYK",
        _ => return None,
    };

    let mut image_dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(header.width),
        "Height" => i64::from(header.height),
        "ColorSpace" => color_space,
        "BitsPerComponent" => 8,
        "Filter" => "DCTDecode",
    };
    // Adobe writes CMYK JPEGs with inverted samples.
    if header.components == 4 && header.adobe {
        let decode: Vec<Object> = [1, 0, 1, 0, 1, 0, 1, 0].into_iter().map(Object::Integer).collect();
        image_dict.set("Decode", decode);
    }

    let stream = Stream::new(image_dict, bytes.to_vec()).with_compression(false);
    let id = doc.add_object(stream);
    Some(EmbeddedImage {
        width: header.width,
        height: header.height,
        id,
    })
}

#[derive(Debug, PartialEq, Eq)]
struct JpegHeader {
    width: u32,
    height: u32,
    components: u8,
    adobe: bool,
}

/// Walk the marker segments up to the first frame header. Returns `None` for
/// anything that isn't a baseline or progressive 8-bit frame.
fn read_jpeg_header(bytes: &[u8]) -> Option<JpegHeader> {
    if !bytes.starts_with(&[0xFF, 0xD8]) {
        return None;
    }

    let mut pos = 2;
    let mut adobe = false;
    loop {
        if *bytes.get(pos)? != 0xFF {
            return None;
        }
        // fill bytes
        while *bytes.get(pos + 1)? == 0xFF {
            pos += 1;
        }
        let marker = bytes[pos + 1];
        pos += 2;

        match marker {
            0x01 | 0xD0..=0xD7 => continue,
            // scan data or end of image before any frame header
            0xD9 | 0xDA => return None,
            _ => {}
        }

        let length = usize::from(u16::from_be_bytes([*bytes.get(pos)?, *bytes.get(pos + 1)?]));
        if length < 2 {
            return None;
        }
        let segment = bytes.get(pos + 2..pos + length)?;

        match marker {
            0xEE if segment.starts_with(b"Adobe") => adobe = true,
            0xC0..=0xC2 => {
                let precision = *segment.first()?;
                let height = u16::from_be_bytes([*segment.get(1)?, *segment.get(2)?]);
                let width = u16::from_be_bytes([*segment.get(3)?, *segment.get(4)?]);
                let components = *segment.get(5)?;
                if precision != 8 || width == 0 || height == 0 {
                    return None;
                }
                return Some(JpegHeader {
                    width: u32::from(width),
                    height: u32::from(height),
                    components,
                    adobe,
                });
            }
            // other frame types: lossless, hierarchical, arithmetic
            0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF => return None,
            _ => {}
        }

        pos += length;
    }
}
