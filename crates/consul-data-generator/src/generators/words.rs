//! Word lists for pet names.

pub const ADVERBS: &[&str] = &[
    "ably", "accurately", "actively", "adequately", "admittedly", "adversely", "allegedly",
    "amazingly", "annually", "apparently", "arguably", "awfully", "badly", "barely", "basically",
    "blatantly", "blindly", "boldly", "briefly", "brightly", "broadly", "busily", "calmly",
    "carefully", "centrally", "certainly", "cheaply", "cleanly", "clearly", "closely", "commonly",
    "completely", "constantly", "correctly", "curiously", "currently", "daily", "deadly",
    "definitely", "deftly", "deeply", "dearly", "directly", "distinctly", "eagerly",
    "early", "easily", "eminently", "endlessly", "equally", "evenly", "evidently", "exactly",
    "explicitly", "externally", "extremely", "factually", "fairly", "finally", "firmly",
    "firstly", "forcibly", "formally", "formerly", "frankly", "freely", "frequently", "fully",
    "generally", "gently", "genuinely", "gladly", "globally", "gradually", "greatly", "happily",
    "hardly", "heartily", "heavily", "highly", "honestly", "hopelessly", "hugely", "humbly",
    "ideally", "immensely", "implicitly", "independently", "indirectly", "infinitely",
    "initially", "instantly", "intensely", "internally", "jointly", "justly", "kindly",
    "largely", "lately", "legally", "lightly", "likely", "literally", "loosely", "loudly",
    "lovely", "luckily", "mainly", "manually", "marginally", "mentally", "merely", "mildly",
    "minimally", "mostly", "mutually", "namely", "nationally", "naturally", "nearly", "neatly",
    "needlessly", "newly", "nicely", "normally", "notably", "noticeably", "obviously", "oddly",
    "officially", "openly", "optionally", "overly", "painfully", "partially", "partly",
    "perfectly", "personally", "physically", "plainly", "pleasantly", "poorly", "positively",
    "possibly", "precisely", "preferably", "presently", "presumably", "previously", "primarily",
    "privately", "probably", "promptly", "properly", "publicly", "purely", "quickly", "quietly",
    "radically", "randomly", "rapidly", "rarely", "rationally", "readily", "really",
    "reasonably", "recently", "regularly", "reliably", "remarkably", "remotely", "repeatedly",
    "rightly", "roughly", "routinely", "sadly", "safely", "scarcely", "secondly", "secretly",
    "seemingly", "sensibly", "separately", "seriously", "severely", "sharply", "shortly",
    "similarly", "simply", "sincerely", "singularly", "slightly", "slowly", "smoothly", "socially",
    "solely", "specially", "specifically", "squarely", "steadily", "strangely", "strictly",
    "strongly", "subtly", "suddenly", "suitably", "supposedly", "surely", "swiftly", "terribly",
    "thankfully", "thoroughly", "tightly", "totally", "trivially", "truly", "typically",
    "ultimately", "unduly", "uniformly", "uniquely", "unlikely", "urgently", "usefully",
    "usually", "utterly", "vaguely", "vastly", "verbally", "vertically", "vigorously", "violently",
    "virtually", "visually", "weekly", "wholly", "widely", "wildly", "willingly", "wrongly",
    "yearly",
];

pub const ADJECTIVES: &[&str] = &[
    "able", "above", "absolute", "accepted", "accurate", "ace", "active", "actual", "adapted",
    "adapting", "adequate", "adjusted", "advanced", "alert", "alive", "allowed", "allowing",
    "amazed", "amazing", "ample", "amused", "amusing", "apparent", "apt", "arriving", "artistic",
    "assured", "assuring", "awaited", "awake", "aware", "balanced", "becoming", "beloved",
    "better", "big", "blessed", "bold", "boss", "brave", "brief", "bright", "bursting", "busy",
    "calm", "capable", "capital", "careful", "caring", "casual", "causal", "central", "certain",
    "champion", "charmed", "charming", "cheerful", "chief", "choice", "civil", "classic", "clean",
    "clear", "clever", "climbing", "close", "closing", "coherent", "comic", "communal", "complete",
    "composed", "concise", "concrete", "content", "cool", "correct", "cosmic", "countless",
    "courteous", "cuddly", "cunning", "cute", "daring", "dashing", "dear", "decent", "deciding",
    "deep", "definite", "delicate", "desired", "destined", "devoted", "direct", "discrete",
    "distinct", "diverse", "divine", "dominant", "driven", "driving", "dynamic", "eager", "easy",
    "electric", "elegant", "emerging", "eminent", "enabled", "enabling", "endless", "engaged",
    "engaging", "enhanced", "enjoyed", "enormous", "enough", "epic", "equal", "equipped", "eternal",
    "ethical", "evident", "evolved", "evolving", "exact", "excited", "exciting", "exotic",
    "expert", "factual", "fair", "faithful", "famous", "fancy", "fast", "feasible", "fine",
    "finer", "firm", "first", "fit", "fitting", "fleet", "flexible", "flowing", "fluent",
    "flying", "fond", "frank", "free", "fresh", "full", "fun", "funny", "game", "generous",
    "gentle", "genuine", "giving", "glad", "glorious", "glowing", "golden", "good", "gorgeous",
    "grand", "grateful", "great", "growing", "grown", "guided", "guiding", "handy", "happy",
    "hardy", "harmless", "healthy", "helped", "helpful", "helping", "heroic", "hip", "holy",
    "honest", "hopeful", "hot", "huge", "humane", "humble", "humorous", "ideal", "immense",
    "immortal", "immune", "improved", "in", "included", "infinite", "informed", "innocent",
    "inspired", "integral", "intense", "intent", "internal", "intimate", "inviting", "joint",
    "just", "keen", "key", "kind", "knowing", "known", "large", "lasting", "leading", "learning",
    "legal", "legible", "lenient", "liberal", "light", "liked", "literate", "live", "living",
    "logical", "loved", "loving", "loyal", "lucky", "magical", "magnetic", "main", "major",
    "many", "massive", "mature", "maximum", "measured", "meet", "merry", "mighty", "mint",
    "model", "modern", "modest", "moral", "more", "moved", "moving", "musical", "mutual",
    "national", "native", "natural", "nearby", "neat", "needed", "neutral", "new", "next", "nice",
    "noble", "normal", "notable", "noted", "novel", "obliging", "on", "one", "open", "optimal",
    "optimum", "organic", "oriented", "outgoing", "patient", "peaceful", "perfect", "pet",
    "picked", "pleasant", "pleased", "pleasing", "poetic", "polished", "polite", "popular",
    "positive", "possible", "powerful", "precious", "precise", "premium", "prepared", "present",
    "pretty", "primary", "prime", "pro", "probable", "profound", "promoted", "prompt", "proper",
    "proud", "proven", "pumped", "pure", "quality", "quick", "quiet", "rapid", "rare", "rational",
    "ready", "real", "refined", "regular", "related", "relative", "relaxed", "relaxing",
    "relevant", "relieved", "renewed", "renewing", "resolved", "rested", "rich", "right",
    "robust", "romantic", "ruling", "sacred", "safe", "saved", "saving", "secure", "select",
    "selected", "sensible", "set", "settled", "settling", "sharing", "sharp", "shining",
    "simple", "sincere", "singular", "skilled", "smart", "smashing", "smiling", "smooth",
    "social", "solid", "sought", "sound", "special", "splendid", "square", "stable", "star",
    "steady", "sterling", "still", "stirred", "stirring", "striking", "strong", "stunning",
    "subtle", "suitable", "suited", "summary", "sunny", "super", "superb", "supreme", "sure",
    "sweeping", "sweet", "talented", "teaching", "tender", "thankful", "thorough", "tidy", "tight",
    "together", "tolerant", "top", "topical", "touched", "touching", "tough", "true",
    "trusted", "trusting", "trusty", "ultimate", "unbiased", "uncommon", "unified", "unique",
    "united", "up", "upright", "upward", "usable", "useful", "valid", "valued", "vast",
    "verified", "viable", "vital", "vocal", "wanted", "warm", "wealthy", "welcome", "welcomed",
    "well", "whole", "willing", "winning", "wired", "wise", "witty", "wondrous", "workable",
    "working", "worthy",
];

pub const NAMES: &[&str] = &[
    "aardvark", "adder", "airedale", "akita", "albacore", "alien", "alpaca", "amoeba", "anchovy",
    "anemone", "ant", "anteater", "antelope", "ape", "aphid", "arachnid", "asp", "baboon",
    "badger", "barnacle", "basilisk", "bass", "bat", "beagle", "bear", "bedbug", "bee", "beetle",
    "bengal", "bird", "bison", "blowfish", "bluebird", "bluegill", "bluejay", "boa", "boar",
    "bobcat", "bonefish", "boxer", "bream", "buck", "buffalo", "bug", "bull", "bulldog",
    "bullfrog", "bunny", "burro", "buzzard", "caiman", "calf", "camel", "cardinal", "caribou",
    "cat", "catfish", "cattle", "chamois", "cheetah", "chicken", "chigger", "chimp", "chipmunk",
    "cicada", "clam", "cobra", "cockatoo", "cod", "collie", "colt", "condor", "coral", "corgi",
    "cougar", "cow", "coyote", "crab", "crane", "crappie", "cricket", "crow", "cub", "dane",
    "dassie", "deer", "dingo", "dinosaur", "doe", "dog", "dogfish", "dolphin", "donkey", "dory",
    "dove", "dragon", "drake", "drum", "duck", "duckling", "eagle", "earwig", "eel", "egret",
    "elephant", "elf", "elk", "emu", "escargot", "ewe", "falcon", "fawn", "feline", "ferret",
    "filly", "finch", "firefly", "fish", "flamingo", "flea", "flounder", "fly", "foal", "fowl",
    "fox", "frog", "gannet", "gar", "gator", "gazelle", "gecko", "gelding", "ghost", "ghoul",
    "gibbon", "giraffe", "glider", "gnat", "gnu", "goat", "goblin", "goldfish", "goose", "gopher",
    "gorilla", "grackle", "griffon", "grizzly", "grouper", "grouse", "grub", "guinea", "gull",
    "guppy", "haddock", "halibut", "hamster", "hare", "hawk", "hedgehog", "hen", "heron",
    "herring", "hog", "hookworm", "hornet", "horse", "hound", "humbird", "husky", "hyena", "ibex",
    "iguana", "imp", "impala", "insect", "jackal", "jaguar", "jay", "jennet", "joey", "kid",
    "killdeer", "kingfish", "kit", "kite", "kitten", "kiwi", "koala", "kodiak", "koi", "krill",
    "lab", "labrador", "lacewing", "ladybird", "ladybug", "lamb", "lamprey", "lark", "leech",
    "lemming", "lemur", "leopard", "liger", "lion", "lionfish", "lizard", "llama", "lobster",
    "locust", "longhorn", "loon", "louse", "lynx", "macaque", "macaw", "mackerel", "maggot",
    "magpie", "mako", "malamute", "mallard", "mammal", "mammoth", "man", "manatee", "mantis",
    "marlin", "marmoset", "marmot", "marten", "martin", "mastiff", "mastodon", "mayfly",
    "meerkat", "midge", "mink", "minnow", "mite", "moccasin", "mole", "mollusk", "molly",
    "monarch", "mongoose", "mongrel", "monitor", "monkey", "monkfish", "monster", "moose",
    "moray", "mosquito", "moth", "mouse", "mudfish", "mule", "mullet", "muskox", "muskrat",
    "mustang", "mutt", "narwhal", "newt", "oarfish", "ocelot", "octopus", "opossum", "orca",
    "oriole", "oryx", "osprey", "ostrich", "owl", "ox", "oyster", "panda", "panther", "parakeet",
    "parrot", "peacock", "pegasus", "pelican", "penguin", "perch", "pheasant", "phoenix", "pig",
    "pigeon", "piglet", "pika", "pipefish", "piranha", "platypus", "polecat", "polliwog", "pony",
    "porpoise", "possum", "prawn", "primate", "pug", "puma", "pup", "python", "quagga", "quail",
    "quetzal", "rabbit", "raccoon", "racer", "ram", "raptor", "rat", "rattler", "raven", "ray",
    "redbird", "redfish", "reindeer", "reptile", "rhino", "robin", "rodent", "rooster", "roughy",
    "sailfish", "salmon", "satyr", "sawfish", "sawfly", "scorpion", "sculpin", "seahorse", "seal",
    "seasnail", "serval", "shad", "shark", "sheep", "sheepdog", "shepherd", "shiner", "shrew",
    "shrimp", "silkworm", "skink", "skunk", "skylark", "sloth", "slug", "snail", "snake", "snapper",
    "snipe", "sole", "sparrow", "spider", "sponge", "squid", "squirrel", "stag", "stallion",
    "starfish", "starling", "stingray", "stinkbug", "stork", "stud", "sturgeon", "sunbeam",
    "sunbird", "sunfish", "swan", "swift", "swine", "tadpole", "tahr", "tapir", "tarpon",
    "teal", "terrier", "tetra", "thrush", "tick", "tiger", "titmouse", "toad", "tomcat",
    "tortoise", "toucan", "treefrog", "trout", "tuna", "turkey", "turtle", "unicorn", "urchin",
    "vervet", "viper", "vulture", "wahoo", "wallaby", "walleye", "walrus", "warthog", "wasp",
    "weasel", "weevil", "werewolf", "whale", "whippet", "wildcat", "wolf", "wombat", "woodcock",
    "worm", "wren", "yak", "yeti", "zebra",
];
