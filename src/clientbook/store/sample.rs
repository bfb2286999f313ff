//! Sample data used when no data file exists yet.

use crate::book::{AddressBook, SellerAddressBook};
use crate::error::Result;
use crate::model::{Address, Client, Email, Name, Phone, Preference, Seller, Tag};

fn tags(names: &[&str]) -> Result<Vec<Tag>> {
    names.iter().map(|t| Tag::new(*t)).collect()
}

pub fn sample_clients() -> Result<Vec<Client>> {
    Ok(vec![
        Client::new(
            Name::new("Alex Yeoh")?,
            Phone::new("87438807")?,
            Email::new("alexyeoh@example.com")?,
            Address::new("Blk 30 Geylang Street 29, #06-40")?,
            tags(&["friends"])?,
        ),
        Client::buyer(
            Name::new("Bernice Yu")?,
            Phone::new("99272758")?,
            Email::new("berniceyu@example.com")?,
            Address::new("Blk 30 Lorong 3 Serangoon Gardens, #07-18")?,
            tags(&["colleagues", "friends"])?,
            Preference::new("5-room HDB flat in Serangoon")?,
        ),
        Client::new(
            Name::new("Charlotte Oliveiro")?,
            Phone::new("93210283")?,
            Email::new("charlotte@example.com")?,
            Address::new("Blk 11 Ang Mo Kio Street 74, #11-04")?,
            tags(&["neighbours"])?,
        ),
        Client::buyer(
            Name::new("David Li")?,
            Phone::new("91031282")?,
            Email::new("lidavid@example.com")?,
            Address::new("Blk 436 Serangoon Gardens Street 26, #16-43")?,
            tags(&["family"])?,
            Preference::new("Condominium near Tampines MRT")?,
        ),
    ])
}

pub fn sample_sellers() -> Result<Vec<Seller>> {
    Ok(vec![
        Seller::new(
            Name::new("Irfan Ibrahim")?,
            Phone::new("92492021")?,
            Email::new("irfan@example.com")?,
            Address::new("Blk 47 Tampines Street 20, #17-35")?,
            Address::new("Blk 47 Tampines Street 20, #17-35")?,
            tags(&["classmates"])?,
        ),
        Seller::new(
            Name::new("Roy Balakrishnan")?,
            Phone::new("92624417")?,
            Email::new("royb@example.com")?,
            Address::new("Blk 45 Aljunied Street 85, #11-31")?,
            Address::new("Blk 9 Bedok North Ave 3, #02-12")?,
            tags(&["colleagues"])?,
        ),
    ])
}

pub fn sample_address_book() -> Result<AddressBook> {
    let mut book = AddressBook::new();
    book.set_clients(sample_clients()?)?;
    Ok(book)
}

pub fn sample_seller_address_book() -> Result<SellerAddressBook> {
    let mut book = SellerAddressBook::new();
    book.set_sellers(sample_sellers()?)?;
    Ok(book)
}
