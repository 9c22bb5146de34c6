// src/domain/category.rs

/// A named award inside a category, shown on the detail page.
pub struct AwardType {
    pub name: &'static str,
    pub description: &'static str,
}

/// One of the four fixed award categories.
pub struct Category {
    /// Slug used in `/categories/:id` urls and form prefills.
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub awards: &'static [AwardType],
    pub criteria: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "business-entrepreneurship",
        title: "Business & Entrepreneurship",
        description: "Celebrating innovative leaders and game-changing enterprises that drive economic growth and transformation.",
        long_description: "The Business & Entrepreneurship category honors individuals and organizations that have demonstrated exceptional leadership, innovation, and impact in the business world. From startups that disrupt industries to established enterprises that set new standards, we celebrate those who drive economic growth and create value for society.",
        awards: &[
            AwardType {
                name: "Innovative Leaders",
                description: "Recognizing visionary leaders who have transformed industries through innovative thinking and strategic execution.",
            },
            AwardType {
                name: "Game-Changing Enterprises",
                description: "Celebrating companies that have revolutionized their sectors and created new paradigms for success.",
            },
            AwardType {
                name: "Rising Entrepreneurs",
                description: "Honoring emerging entrepreneurs who show exceptional promise and have achieved remarkable early success.",
            },
            AwardType {
                name: "Women Leaders in Business",
                description: "Acknowledging outstanding women leaders who have broken barriers and achieved excellence in business.",
            },
        ],
        criteria: &[
            "Demonstrated innovation and creativity in business approach",
            "Significant impact on industry or community",
            "Sustainable business practices and ethical leadership",
            "Measurable growth and success metrics",
        ],
    },
    Category {
        id: "pharma-healthcare",
        title: "Pharma & Healthcare",
        description: "Honoring medical excellence and healthcare innovation that saves lives and improves well-being.",
        long_description: "The Pharma & Healthcare category recognizes professionals, researchers, and organizations that have advanced medical science, improved patient outcomes, and contributed to public health. From breakthrough research to compassionate care, we honor those dedicated to healing and wellness.",
        awards: &[
            AwardType {
                name: "Medical Excellence",
                description: "Recognizing healthcare professionals who have demonstrated exceptional clinical skills and patient care.",
            },
            AwardType {
                name: "Healthcare Innovation",
                description: "Celebrating innovations in medical technology, treatment methods, and healthcare delivery systems.",
            },
            AwardType {
                name: "Pharma Research Leadership",
                description: "Honoring researchers and pharmaceutical companies leading breakthrough discoveries and drug development.",
            },
            AwardType {
                name: "Lifetime Service to Healthcare",
                description: "Acknowledging individuals with decades of dedicated service and significant contributions to healthcare.",
            },
        ],
        criteria: &[
            "Outstanding contributions to medical science or patient care",
            "Innovation in healthcare delivery or treatment",
            "Impact on public health and wellness",
            "Recognition from peers and professional bodies",
        ],
    },
    Category {
        id: "film-entertainment",
        title: "Film & Entertainment",
        description: "Recognizing artistic brilliance and creative excellence in the entertainment industry.",
        long_description: "The Film & Entertainment category honors artists, creators, and industry professionals who have enriched our cultural landscape through exceptional work. From actors and directors to producers and technicians, we celebrate those who bring stories to life and entertain millions.",
        awards: &[
            AwardType {
                name: "Artistic Brilliance",
                description: "Recognizing exceptional artistic achievement and creative expression in film and entertainment.",
            },
            AwardType {
                name: "Creative Excellence",
                description: "Celebrating outstanding creative contributions that have set new standards in entertainment.",
            },
            AwardType {
                name: "Industry Achievement",
                description: "Honoring professionals who have made significant contributions to the entertainment industry.",
            },
            AwardType {
                name: "Emerging Talent",
                description: "Acknowledging promising new talent that shows exceptional potential and early achievement.",
            },
        ],
        criteria: &[
            "Outstanding artistic or creative achievement",
            "Significant impact on entertainment industry",
            "Recognition from audiences and critics",
            "Contribution to cultural enrichment",
        ],
    },
    Category {
        id: "special-recognitions",
        title: "Special Recognitions",
        description: "Acknowledging exceptional contributions across diverse fields and social impact initiatives.",
        long_description: "The Special Recognitions category honors individuals and organizations that have created meaningful impact across various sectors. From education and sports to technology and public service, we celebrate diverse achievements that inspire and transform communities.",
        awards: &[
            AwardType {
                name: "Social Impact",
                description: "Recognizing initiatives and individuals creating positive social change and community development.",
            },
            AwardType {
                name: "Education Excellence",
                description: "Celebrating educators and institutions that have transformed learning and educational outcomes.",
            },
            AwardType {
                name: "Sports Achievement",
                description: "Honoring athletes and sports professionals who have achieved excellence and inspired others.",
            },
            AwardType {
                name: "Technology & Innovation",
                description: "Acknowledging tech innovators who have created solutions that transform how we live and work.",
            },
            AwardType {
                name: "Public Service",
                description: "Recognizing public servants and organizations dedicated to serving communities and the nation.",
            },
        ],
        criteria: &[
            "Significant positive impact on community or society",
            "Demonstrated excellence in chosen field",
            "Inspiration to others and future generations",
            "Measurable outcomes and achievements",
        ],
    },
];

pub fn find_category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

pub fn is_valid_category_title(title: &str) -> bool {
    CATEGORIES.iter().any(|c| c.title == title)
}
