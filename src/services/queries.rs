//! GraphQL documents sent to the CMS.
//!
//! Field names follow the backend schema as deployed, including its mixed
//! casing; the normalizer maps them onto the view models.

/// Site-wide settings page.
pub const SITE_SETTINGS: &str = r#"
query GetSiteSettings {
  page(id: "site-settings", idType: URI) {
    siteSettings {
      launchdate
      instagramurl
      linkedinurl
      whatsappurl
    }
  }
}
"#;

pub const HOMEPAGE: &str = r#"
query HomepageContent {
  page(id: "home", idType: URI) {
    homepageContent {
      heroHeading
      heroSubheading
      heroPrimaryText
      heroPrimaryLink
      heroSecondaryText
      heroSecondaryLink
      missionCards {
        cardTitle
        cardDescription
        cardImage { node { sourceUrl altText } }
      }
      stats { statNumber statLabel }
      quoteText
      quoteButtonText
      quoteButtonLink
      heroGallery { edges { node { sourceUrl altText } } }
    }
  }
}
"#;

pub const ABOUT: &str = r#"
query AboutContent {
  page(id: "about", idType: URI) {
    aboutPageContent {
      heroHeading
      herosubheading
      herobody
      heroimage { node { sourceUrl altText } }
      journeyItems { year title description }
      corevalues {
        valueTitle
        valuedescription
        valueimage { node { sourceUrl altText } }
      }
      leadershipteam {
        name
        role
        bio
        photo { node { sourceUrl altText } }
      }
      ctatext
      ctaButtonText
      ctaButtonLink
    }
  }
}
"#;

pub const SERVICES: &str = r#"
query ServicesPage {
  page(id: "services", idType: URI) {
    servicespagecontent {
      heroheading
      herobody
      offerheading
      offercards {
        cardtitle
        cardbody
        cardbullets { bullettext }
      }
      lifestageheading
      lifestageprograms {
        stagelabel
        programtitle
        programbody
        programtags { tagtext }
      }
      faqheading
      faqs { question answer }
      ctabody
      ctabuttontext
      ctabuttonlink
    }
  }
}
"#;

pub const RESOURCES: &str = r#"
query ResourcesPage {
  page(id: "resources", idType: URI) {
    resourcesPageContent {
      heroEyebrow
      heroHeading
      heroBody
      heroChips { chipText }
      libraryHeading
      libraryBody
      audienceFilters { filterLabel filterSlug }
      libraryCards { type title audience description meta ctaText ctaLink audienceSlug }
      downloadHeading
      downloadBody
      downloadCards { title description meta ctaText ctaLink }
      forYouHeading
      forYouBody
      forYouCards { title description bullets { bulletText } ctaText ctaLink }
      helpHeading
      helpBody
      helpPrimaryText
      helpPrimaryLink
      helpSecondaryText
      helpSecondaryLink
      quickLinks { label link kind }
      ctaBarText
      ctaBarButtonText
      ctaBarButtonLink
    }
  }
}
"#;

pub const BLOG_PAGE: &str = r#"
query BlogPage {
  page(id: "blog", idType: URI) {
    blogPageContent {
      heroEyebrow
      heroHeading
      herobody
      herochips { chipText }
      featuredHeading
      featuredbody
      featuredposts {
        post {
          nodes {
            ... on Post {
              id
              title
              date
              excerpt
              uri
              featuredImage { node { sourceUrl altText } }
              author { node { name } }
              categories { nodes { name slug } }
            }
          }
        }
      }
      topicfilters { filterLabel filterSlug }
      ctatext
      ctaButtonText
      ctabuttonlink
    }
  }
}
"#;

pub const CONTACT: &str = r#"
query ContactPage {
  page(id: "contact", idType: URI) {
    contactPageContent {
      heroEyebrow
      heroHeading
      herobody
      herochips { chipText }
      formHeading
      formbody
      identityoptions { label }
      topicoptions { label }
      contactEmail
      contactPhone
      contactaddress
      bestWaysHeading
      bestwaysbody
      contactbuttons { label link }
      emergencyHeading
      emergencybody
      emergencyLinkText
      emergencylinkurl
      spaceHeading
      spacebody
      openinghours { label }
      accessibility { label }
      mapimage { node { sourceUrl altText } }
      mapCaption
      quickquestions { question answer }
      ctaBarText
      ctaBarButtonText
      ctabarbuttonlink
    }
  }
}
"#;

/// Published posts, newest first.
pub const POSTS: &str = r#"
query Posts($first: Int!) {
  posts(first: $first, where: { status: PUBLISH, orderby: { field: DATE, order: DESC } }) {
    nodes {
      id
      title
      date
      excerpt
      uri
      featuredImage { node { sourceUrl altText } }
      author { node { name } }
      categories { nodes { name slug } }
    }
  }
}
"#;

pub const POST_BY_URI: &str = r#"
query PostByUri($uri: ID!) {
  post(id: $uri, idType: URI) {
    id
    title
    date
    content
    excerpt
    uri
    featuredImage { node { sourceUrl altText } }
    author { node { name } }
    categories { nodes { name slug } }
  }
}
"#;

/// Paths from a query's `data` to each page's content group.
pub mod groups {
    pub const SITE_SETTINGS: &str = "page.siteSettings";
    pub const HOMEPAGE: &str = "page.homepageContent";
    pub const ABOUT: &str = "page.aboutPageContent";
    pub const SERVICES: &str = "page.servicespagecontent";
    pub const RESOURCES: &str = "page.resourcesPageContent";
    pub const BLOG_PAGE: &str = "page.blogPageContent";
    pub const CONTACT: &str = "page.contactPageContent";
    pub const POSTS: &str = "posts";
    pub const POST: &str = "post";
}
