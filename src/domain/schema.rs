//! Serde models for the JSON-LD nodes this crate emits. Struct field order
//! is the order the serializer writes, so it mirrors the published markup.
//! Optional fields serialize as `null` on purpose; consumers of the markup
//! expect the keys to be present.

use crate::domain::model::DistributorRecord;
use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";

#[derive(Debug, Clone, Serialize)]
pub struct GraphEnvelope {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@graph")]
    pub graph: Vec<LocalBusiness>,
}

impl GraphEnvelope {
    pub fn new(graph: Vec<LocalBusiness>) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            graph,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalBusiness {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: Option<String>,
    pub telephone: Option<String>,
    pub address: PostalAddress,
    #[serde(rename = "areaServed")]
    pub area_served: String,
}

impl LocalBusiness {
    /// The state display name doubles as `addressRegion` and `areaServed`.
    pub fn new(record: &DistributorRecord, state_name: &str) -> Self {
        Self {
            node_type: "LocalBusiness",
            name: record.name.clone(),
            telephone: record.phone.clone(),
            address: PostalAddress::new(
                record.address.clone(),
                record.city.clone(),
                state_name.to_string(),
            ),
            area_served: state_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: Option<String>,
    #[serde(rename = "addressLocality")]
    pub address_locality: Option<String>,
    #[serde(rename = "addressRegion")]
    pub address_region: String,
}

impl PostalAddress {
    pub fn new(street: Option<String>, locality: Option<String>, region: String) -> Self {
        Self {
            node_type: "PostalAddress",
            street_address: street,
            address_locality: locality,
            address_region: region,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemListEnvelope {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    pub url: String,
    #[serde(rename = "numberOfItems")]
    pub number_of_items: usize,
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

impl ItemListEnvelope {
    pub fn new(name: String, url: String, items: Vec<ListItem>) -> Self {
        Self {
            context: SCHEMA_CONTEXT,
            node_type: "ItemList",
            name,
            url,
            number_of_items: items.len(),
            item_list_element: items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub position: usize,
    pub item: Product,
}

impl ListItem {
    pub fn new(position: usize, item: Product) -> Self {
        Self {
            node_type: "ListItem",
            position,
            item,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Product {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    pub image: Option<String>,
    pub description: String,
    pub url: String,
    pub brand: Brand,
    #[serde(rename = "additionalProperty")]
    pub additional_property: Vec<PropertyValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Brand {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
}

impl Brand {
    pub fn new(name: &str) -> Self {
        Self {
            node_type: "Brand",
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PropertyValue {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    pub value: String,
}

impl PropertyValue {
    pub fn alt_text(value: &str) -> Self {
        Self {
            node_type: "PropertyValue",
            name: "Alt Text".to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_business_serializes_missing_fields_as_null() {
        let record = DistributorRecord {
            name: Some("Acme Pharma".to_string()),
            phone: None,
            address: None,
            city: Some("Pune".to_string()),
        };
        let node = LocalBusiness::new(&record, "Maharashtra");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["@type"], "LocalBusiness");
        assert_eq!(json["name"], "Acme Pharma");
        assert_eq!(json["telephone"], serde_json::Value::Null);
        assert_eq!(json["address"]["@type"], "PostalAddress");
        assert_eq!(json["address"]["streetAddress"], serde_json::Value::Null);
        assert_eq!(json["address"]["addressLocality"], "Pune");
        assert_eq!(json["address"]["addressRegion"], "Maharashtra");
        assert_eq!(json["areaServed"], "Maharashtra");
    }

    #[test]
    fn test_item_list_envelope_counts_items() {
        let item = ListItem::new(
            1,
            Product {
                node_type: "Product",
                name: "Calcium Syrup".to_string(),
                image: None,
                description: String::new(),
                url: "https://www.rudraxcell.com/#".to_string(),
                brand: Brand::new("RudraXcell Lifecare Pvt. Ltd."),
                additional_property: vec![PropertyValue::alt_text("")],
            },
        );
        let envelope = ItemListEnvelope::new(
            "RudraXcell Lifecare Product Range".to_string(),
            "https://www.rudraxcell.com/products.html".to_string(),
            vec![item],
        );

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "ItemList");
        assert_eq!(json["numberOfItems"], 1);
        assert_eq!(json["itemListElement"][0]["position"], 1);
        assert_eq!(
            json["itemListElement"][0]["item"]["brand"]["name"],
            "RudraXcell Lifecare Pvt. Ltd."
        );
    }
}
