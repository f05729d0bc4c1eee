//! HTML view of a movie record.
//!
//! The view produces the *complete* wire document for the `/movie` GET path:
//! status line, `Content-Type` header, blank line, and markup. It bypasses
//! the generic response assembly on purpose, so these documents never carry a
//! `Content-Length` header.

use crate::movies::MovieRecord;

/// Renders `record` into the fixed movie page.
///
/// Every known field is read with an empty-string default, so records with
/// absent fields render as gaps rather than failures. Field values are
/// interpolated verbatim; no HTML escaping is applied.
pub fn render(record: &MovieRecord) -> String {
    let title = record.field("Title");
    format!(
        "HTTP/1.1 200 OK\r\n\
         Content-Type: text/html\r\n\
         \r\n\
         <!DOCTYPE html>\r\n\
         <html>\r\n\
         <head>\r\n\
         <title>Movies</title>\r\n\
         </head>\r\n\
         <body>\r\n\
         <h1>{title} ({year})</h1>\r\n\
         <div class=\"movie-details\">\r\n\
         <img src=\"{poster}\" alt=\"{title}\"> <br>\r\n\
         <strong>Rated:</strong> {rated}<br>\r\n\
         <strong>Released:</strong> {released}<br>\r\n\
         <strong>Runtime:</strong> {runtime}<br>\r\n\
         <strong>Genre:</strong> {genre}<br>\r\n\
         <strong>Director:</strong> {director}<br>\r\n\
         <strong>IMDb Rating:</strong> {rating}<br>\r\n\
         <strong>Plot:</strong><br>\r\n\
         <p>{plot}</p>\r\n\
         </div>\r\n\
         </body>\r\n\
         </html>",
        year = record.field("Year"),
        poster = record.field("Poster"),
        rated = record.field("Rated"),
        released = record.field("Released"),
        runtime = record.field("Runtime"),
        genre = record.field("Genre"),
        director = record.field("Director"),
        rating = record.field("imdbRating"),
        plot = record.field("Plot"),
    )
}
