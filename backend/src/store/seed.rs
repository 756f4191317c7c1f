//! Default catalog written the first time a key is read.

use crate::models::{BlogPost, PricingType, Product, SiteSettings, Vendor, VendorLogo};

use super::{JsonStore, StorageKey};
use crate::error::StoreResult;

/// Cover image used when a product is saved without one
pub const DEFAULT_PRODUCT_IMAGE: &str =
    "https://images.unsplash.com/photo-1557200134-90327ee9fafa?auto=format&fit=crop&q=80&w=800";

pub fn default_categories() -> Vec<String> {
    ["Software", "Telecom", "Marketing", "IT Hardware"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn default_vendors() -> Vec<Vendor> {
    vec![Vendor {
        id: "1".into(),
        name: "Amit Kumar".into(),
        company_name: "Nexus Solutions".into(),
        mobile: "9876543210".into(),
        email: "amit@nexus.com".into(),
        location: "Noida".into(),
        category: "Software".into(),
        product_expertise: "CRM".into(),
        custom_box: "Verified".into(),
        verified: true,
        date_joined: None,
    }]
}

pub fn default_logos() -> Vec<VendorLogo> {
    [
        ("d1", "Microsoft", "https://upload.wikimedia.org/wikipedia/commons/4/44/Microsoft_logo.svg"),
        ("d2", "Tally", "https://upload.wikimedia.org/wikipedia/commons/3/3d/Tally_Solutions_Logo.svg"),
        ("d3", "Airtel", "https://upload.wikimedia.org/wikipedia/commons/f/f3/Airtel_logo.svg"),
        ("d4", "Zoho", "https://upload.wikimedia.org/wikipedia/commons/e/e0/Zoho_Corporation_logo.svg"),
        ("d5", "Jio", "https://upload.wikimedia.org/wikipedia/commons/5/50/Reliance_Jio_Logo.svg"),
        ("d6", "AWS", "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg"),
    ]
    .into_iter()
    .map(|(id, name, image)| VendorLogo {
        id: id.into(),
        name: name.into(),
        image: image.into(),
    })
    .collect()
}

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    short: &'static str,
    description: &'static str,
    category: &'static str,
    price: &'static str,
    pricing: PricingType,
    image: &'static str,
    rating: f32,
    features: &'static [&'static str],
    vendor: &'static str,
    vendor_rating: f32,
}

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        id: "p1",
        name: "Zoho CRM Plus",
        short: "Unified customer experience platform for sales and support teams.",
        description: "Bring sales, marketing and customer support onto one platform with pipeline automation, omnichannel inbox and GST-ready invoicing for Indian businesses.",
        category: "Software",
        price: "₹1,400/user/mo",
        pricing: PricingType::Subscription,
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800",
        rating: 4.7,
        features: &["Sales pipeline automation", "Omnichannel support desk", "GST invoicing", "Mobile apps"],
        vendor: "Zoho Corporation",
        vendor_rating: 4.8,
    },
    ProductSeed {
        id: "p2",
        name: "Tally Prime",
        short: "Accounting, inventory and compliance for MSMEs.",
        description: "Complete business management covering accounting, inventory, banking, taxation and payroll with e-invoicing and e-way bill generation.",
        category: "Software",
        price: "₹18,000",
        pricing: PricingType::OneTime,
        image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?auto=format&fit=crop&q=80&w=800",
        rating: 4.8,
        features: &["GST returns", "E-invoicing", "Multi-godown inventory", "Payroll"],
        vendor: "Tally Solutions",
        vendor_rating: 4.9,
    },
    ProductSeed {
        id: "p3",
        name: "Airtel Business Leased Line",
        short: "Dedicated symmetric internet with 99.5% uptime SLA.",
        description: "Enterprise-grade dedicated bandwidth from 10 Mbps to 10 Gbps with static IPs, 24x7 NOC monitoring and a single point of contact.",
        category: "Telecom",
        price: "₹9,999/mo",
        pricing: PricingType::Subscription,
        image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&q=80&w=800",
        rating: 4.5,
        features: &["1:1 contention", "Static IP pool", "24x7 NOC", "SLA-backed uptime"],
        vendor: "Bharti Airtel",
        vendor_rating: 4.6,
    },
    ProductSeed {
        id: "p4",
        name: "Jio Cloud PBX",
        short: "Cloud telephony with IVR, call recording and CRM hooks.",
        description: "Replace on-premise EPABX with a cloud PBX that routes calls across branches, records conversations and syncs with popular CRMs.",
        category: "Telecom",
        price: "₹499/extension/mo",
        pricing: PricingType::Usage,
        image: "https://images.unsplash.com/photo-1523966211575-eb4a01e7dd51?auto=format&fit=crop&q=80&w=800",
        rating: 4.3,
        features: &["Multi-level IVR", "Call recording", "CRM integration", "Analytics dashboard"],
        vendor: "Reliance Jio",
        vendor_rating: 4.4,
    },
    ProductSeed {
        id: "p5",
        name: "HubSpot Marketing Hub",
        short: "Inbound marketing automation for B2B demand generation.",
        description: "Email campaigns, landing pages, lead scoring and attribution reporting to grow a qualified B2B pipeline.",
        category: "Marketing",
        price: "₹4,200/mo",
        pricing: PricingType::Subscription,
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
        rating: 4.6,
        features: &["Email automation", "Landing pages", "Lead scoring", "Attribution reports"],
        vendor: "HubSpot",
        vendor_rating: 4.7,
    },
    ProductSeed {
        id: "p6",
        name: "Dell PowerEdge T150",
        short: "Entry tower server for branch offices and small data rooms.",
        description: "Quiet single-socket tower server with Xeon E-2300 processors, ECC memory and hot-plug drives, backed by next-business-day onsite service.",
        category: "IT Hardware",
        price: "₹1,15,000",
        pricing: PricingType::OneTime,
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?auto=format&fit=crop&q=80&w=800",
        rating: 4.4,
        features: &["Intel Xeon E-2300", "Up to 128GB ECC RAM", "Hot-plug drives", "3-year onsite warranty"],
        vendor: "Dell Technologies",
        vendor_rating: 4.5,
    },
];

pub fn default_products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|p| Product {
            id: p.id.into(),
            name: p.name.into(),
            slug: crate::marketplace::slugify(p.name),
            short_description: p.short.into(),
            description: p.description.into(),
            category: p.category.into(),
            price: p.price.into(),
            pricing_type: p.pricing,
            image: p.image.into(),
            images: vec![p.image.into()],
            rating: p.rating,
            features: p.features.iter().map(|f| f.to_string()).collect(),
            vendor_name: p.vendor.into(),
            vendor_rating: p.vendor_rating,
        })
        .collect()
}

pub fn default_blogs() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: "b1".into(),
            title: "Why BANT Still Wins in Indian B2B Sales".into(),
            slug: "why-bant-still-wins-in-indian-b2b-sales".into(),
            excerpt: "Budget, Authority, Need and Timeline remain the fastest way to separate buyers from browsers.".into(),
            content: "Qualification frameworks come and go, but BANT keeps proving itself in markets where procurement cycles are long and decision makers are few. Capturing all four signals at intake lets vendors prioritise the conversations that close.".into(),
            author: "BantConfirm Research".into(),
            category: "Insights".into(),
            date: "12/01/2025".into(),
            image: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=800".into(),
        },
        BlogPost {
            id: "b2".into(),
            title: "Choosing a Leased Line for Your MSME".into(),
            slug: "choosing-a-leased-line-for-your-msme".into(),
            excerpt: "Contention ratios, SLAs and last-mile redundancy explained for first-time buyers.".into(),
            content: "A leased line is a long commitment. Compare uptime guarantees, check whether the last mile is fibre, and ask for a dual-homed setup if your operations cannot tolerate downtime.".into(),
            author: "Network Desk".into(),
            category: "Telecom".into(),
            date: "28/02/2025".into(),
            image: "https://images.unsplash.com/photo-1544197150-b99a580bb7a8?auto=format&fit=crop&q=80&w=800".into(),
        },
        BlogPost {
            id: "b3".into(),
            title: "GST-Ready Accounting Software Checklist".into(),
            slug: "gst-ready-accounting-software-checklist".into(),
            excerpt: "Eight capabilities to verify before you sign an accounting software contract.".into(),
            content: "E-invoicing, e-way bills, multi-GSTIN support and audit trails are table stakes. Ask vendors for a sandbox and run one month of real transactions before committing.".into(),
            author: "Finance Desk".into(),
            category: "Software".into(),
            date: "15/03/2025".into(),
            image: "https://images.unsplash.com/photo-1554224155-6726b3ff858f?auto=format&fit=crop&q=80&w=800".into(),
        },
    ]
}

/// Write every default blob, skipping keys that already hold data unless `force`
///
/// Returns the keys that were written.
pub fn seed_all(store: &JsonStore, force: bool) -> StoreResult<Vec<StorageKey>> {
    let mut written = Vec::new();
    let mut put = |key: StorageKey, write: &dyn Fn() -> StoreResult<()>| -> StoreResult<()> {
        if force || !store.contains(key) {
            write()?;
            written.push(key);
        }
        Ok(())
    };

    put(StorageKey::Products, &|| store.save(StorageKey::Products, &default_products()))?;
    put(StorageKey::Vendors, &|| store.save(StorageKey::Vendors, &default_vendors()))?;
    put(StorageKey::Blogs, &|| store.save(StorageKey::Blogs, &default_blogs()))?;
    put(StorageKey::VendorLogos, &|| store.save(StorageKey::VendorLogos, &default_logos()))?;
    put(StorageKey::Categories, &|| store.save(StorageKey::Categories, &default_categories()))?;
    put(StorageKey::SiteSettings, &|| store.save(StorageKey::SiteSettings, &SiteSettings::default()))?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_seed_products_have_unique_slugs() {
        let products = default_products();
        let mut slugs: Vec<_> = products.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), products.len());
        assert_eq!(products[0].slug, "zoho-crm-plus");
    }

    #[test]
    fn test_seed_categories_cover_products() {
        let categories = default_categories();
        for product in default_products() {
            assert!(categories.contains(&product.category), "{}", product.category);
        }
    }

    #[test]
    fn test_seed_all_respects_existing_data() {
        let dir = tempdir().unwrap();
        let store = JsonStore::open(dir.path()).unwrap();
        store
            .save(StorageKey::Categories, &vec!["Custom".to_string()])
            .unwrap();

        let written = seed_all(&store, false).unwrap();
        assert!(!written.contains(&StorageKey::Categories));
        assert!(written.contains(&StorageKey::Products));

        let cats: Vec<String> = store.load(StorageKey::Categories).unwrap().unwrap();
        assert_eq!(cats, vec!["Custom"]);

        let written = seed_all(&store, true).unwrap();
        assert_eq!(written.len(), 6);
        let cats: Vec<String> = store.load(StorageKey::Categories).unwrap().unwrap();
        assert_eq!(cats.len(), 4);
    }
}
